use std::path::Path;

use tracing::{info, warn};

use crate::skills::domain::catalog::MasterSkillCatalog;

/// Loads the master catalog (`{ "skills": [ { name, category, icon } ] }`).
/// A missing or malformed file gives an empty catalog.
pub async fn load_skill_catalog(path: &Path) -> MasterSkillCatalog {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skill catalog not loaded");
            return MasterSkillCatalog::default();
        }
    };

    match serde_json::from_str::<MasterSkillCatalog>(&raw) {
        Ok(catalog) => {
            info!(path = %path.display(), skills = catalog.len(), "Skill catalog loaded");
            catalog
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skill catalog is malformed");
            MasterSkillCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills-master.json");
        std::fs::write(
            &path,
            r#"{ "skills": [ { "name": "Excel", "category": "Tools", "icon": "📊" } ] }"#,
        )
        .unwrap();

        let catalog = load_skill_catalog(&path).await;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("excel").unwrap().category, "Tools");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_skill_catalog(&dir.path().join("nope.json")).await.is_empty());

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(load_skill_catalog(&path).await.is_empty());
    }
}
