// src/modules/content/adapter/outgoing/content_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::{
    certifications, education, experience, profile, projects, site_settings, skills,
};
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::content::domain::entities::{
    Certification, Education, Experience, Profile, Project, SiteSettings, Skill,
};

// ============================================================================
// Hosted-mode implementation
// ============================================================================

/// Rows come back in database order; `display_order` is not applied.
#[derive(Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn get_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        let model = profile::Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(profile::Model::to_domain))
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        projects::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(projects::Model::to_domain)
            .collect()
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, ContentQueryError> {
        // Ids that are not UUIDs cannot exist in the table.
        let Ok(project_id) = Uuid::from_str(id) else {
            return Ok(None);
        };

        projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(projects::Model::to_domain)
            .transpose()
    }

    async fn get_education(&self) -> Result<Vec<Education>, ContentQueryError> {
        education::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(education::Model::to_domain)
            .collect()
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        experience::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(experience::Model::to_domain)
            .collect()
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        let models = skills::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(skills::Model::to_domain).collect())
    }

    async fn get_certifications(&self) -> Result<Vec<Certification>, ContentQueryError> {
        certifications::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(certifications::Model::to_domain)
            .collect()
    }

    async fn get_settings(&self) -> Result<Option<SiteSettings>, ContentQueryError> {
        let model = site_settings::Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(site_settings::Model::to_domain))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(err: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn project_model(id: Uuid, title: &str) -> projects::Model {
        let now = Utc::now();
        projects::Model {
            id,
            title: title.to_string(),
            description: "Three-statement model".to_string(),
            short_description: None,
            category: "financial_modeling".to_string(),
            thumbnail_url: None,
            github_url: None,
            google_docs_url: None,
            google_sheets_url: Some("https://docs.google.com/spreadsheets/d/1".to_string()),
            pdf_url: None,
            external_url: None,
            embed_code: None,
            is_featured: true,
            display_order: 1,
            tags: json!(["finance", "excel"]),
            skills_used: json!(["Excel"]),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_get_projects_maps_rows() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project_model(id, "LBO")]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let projects = query.get_projects().await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, id.to_string());
        assert_eq!(projects[0].tags, vec!["finance", "excel"]);
        assert_eq!(projects[0].skills_used, vec!["Excel"]);
        assert!(projects[0].is_featured);
    }

    #[tokio::test]
    async fn test_get_project_with_non_uuid_id_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert!(query.get_project("not-a-uuid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_project_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let result = query.get_project(&Uuid::new_v4().to_string()).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_column_is_serialization_error() {
        let mut model = project_model(Uuid::new_v4(), "Broken");
        model.tags = json!({ "not": "a list" });
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let err = query.get_projects().await.unwrap_err();

        assert!(matches!(err, ContentQueryError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let err = query.get_skills().await.unwrap_err();

        match err {
            ContentQueryError::DatabaseError(msg) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profile::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert!(query.get_profile().await.unwrap().is_none());
    }
}
