use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::local_store::application::ports::outgoing::{KeyValueStore, StoreError};

/// Redis-backed key/value store.
///
/// ## Redis data model
/// ```text
/// {namespace}:{key} -> "<serialized JSON value>"
/// ```
/// Plain string keys without TTL; a write replaces the whole value.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    pool: Arc<Pool>,
    namespace: String,
}

impl RedisKeyValueStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self::with_namespace(pool, "portfolio:store")
    }

    pub fn with_namespace(pool: Arc<Pool>, namespace: impl Into<String>) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
        }
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.get_conn().await?;
        conn.get::<_, Option<String>>(self.redis_key(key))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(self.redis_key(key), value)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(self.redis_key(key))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadpool_redis::{Config, Runtime};

    fn store_for(url: &str) -> RedisKeyValueStore {
        let pool = Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .expect("pool config is valid");
        RedisKeyValueStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn test_keys_are_namespaced() {
        let store = store_for("redis://127.0.0.1:6379");
        assert_eq!(
            store.redis_key("portfolio_projects"),
            "portfolio:store:portfolio_projects"
        );

        let custom = RedisKeyValueStore::with_namespace(Arc::clone(&store.pool), "site-a");
        assert_eq!(custom.redis_key("portfolio_skills"), "site-a:portfolio_skills");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_backend_error() {
        let store = store_for("redis://127.0.0.1:1");

        let err = store.get_item("portfolio_projects").await.unwrap_err();

        assert!(matches!(err, StoreError::Backend(msg) if msg.starts_with("Pool error")));
    }

    /// Runs against a live server only when `REDIS_URL` is set.
    #[tokio::test]
    async fn test_round_trip_against_live_server() {
        let Ok(url) = std::env::var("REDIS_URL") else {
            eprintln!("REDIS_URL not set; skipping Redis round trip");
            return;
        };
        let pool = Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .expect("pool config is valid");
        let store = RedisKeyValueStore::with_namespace(
            Arc::new(pool),
            format!("portfolio:test:{}", uuid::Uuid::new_v4()),
        );

        store.set_item("k", "[1,2]".to_string()).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("[1,2]"));

        store.remove_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }
}
