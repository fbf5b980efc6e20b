use std::env;
use std::path::PathBuf;

/// Where portfolio content is read from. Decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// JSON files in the content directory, admin edits kept in the key/value store.
    Static,
    /// Hosted PostgreSQL database.
    Hosted,
}

impl ContentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Static => "static",
            ContentMode::Hosted => "hosted",
        }
    }

    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_lowercase().as_str() {
            "" | "static" => Ok(ContentMode::Static),
            "hosted" | "dynamic" | "supabase" => Ok(ContentMode::Hosted),
            other => Err(ConfigError::InvalidValue {
                key: "CONTENT_MODE",
                value: other.to_string(),
            }),
        }
    }
}

/// Backing store for the local key/value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
    Redis(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content_mode: ContentMode,
    pub content_dir: PathBuf,
    pub skills_catalog_path: PathBuf,
    pub store_backend: StoreBackend,
    /// Only present in hosted mode.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_mode = match lookup("CONTENT_MODE") {
            Some(raw) => ContentMode::parse(&raw)?,
            None => ContentMode::Static,
        };

        let content_dir = PathBuf::from(
            lookup("CONTENT_DIR").unwrap_or_else(|| "public/content".to_string()),
        );

        let skills_catalog_path = lookup("SKILLS_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| content_dir.join("skills-master.json"));

        let store_backend = match lookup("STORE_BACKEND")
            .unwrap_or_else(|| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File(PathBuf::from(
                lookup("STORE_PATH").unwrap_or_else(|| "data/local-store.json".to_string()),
            )),
            "redis" => StoreBackend::Redis(
                lookup("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?,
            ),
            other => {
                return Err(ConfigError::InvalidValue {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let database_url = match content_mode {
            ContentMode::Hosted => {
                Some(lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?)
            }
            ContentMode::Static => None,
        };

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        Ok(Self {
            content_mode,
            content_dir,
            skills_catalog_path,
            store_backend,
            database_url,
            host,
            port,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_to_static_mode_with_memory_store() {
        let config = config_from(HashMap::new()).unwrap();

        assert_eq!(config.content_mode, ContentMode::Static);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.content_dir, PathBuf::from("public/content"));
        assert_eq!(
            config.skills_catalog_path,
            PathBuf::from("public/content/skills-master.json")
        );
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_hosted_mode_requires_database_url() {
        let err = config_from(maplit::hashmap! { "CONTENT_MODE" => "hosted" }).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let config = config_from(maplit::hashmap! {
            "CONTENT_MODE" => "Supabase",
            "DATABASE_URL" => "postgres://localhost/portfolio",
        })
        .unwrap();
        assert_eq!(config.content_mode, ContentMode::Hosted);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/portfolio")
        );
    }

    #[test]
    fn test_rejects_unknown_mode_and_bad_port() {
        let err = config_from(maplit::hashmap! { "CONTENT_MODE" => "cloud" }).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "CONTENT_MODE", .. }));

        let err = config_from(maplit::hashmap! { "PORT" => "eighty" }).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_store_backend_selection() {
        let config = config_from(maplit::hashmap! {
            "STORE_BACKEND" => "file",
            "STORE_PATH" => "/tmp/store.json",
        })
        .unwrap();
        assert_eq!(
            config.store_backend,
            StoreBackend::File(PathBuf::from("/tmp/store.json"))
        );

        let err = config_from(maplit::hashmap! { "STORE_BACKEND" => "redis" }).unwrap_err();
        assert_eq!(err, ConfigError::Missing("REDIS_URL"));
    }
}
