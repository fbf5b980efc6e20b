// src/modules/content/application/ports/outgoing/content_query.rs

use async_trait::async_trait;

use crate::content::domain::entities::{
    Certification, Education, Experience, PortfolioContent, Profile, Project, SiteSettings, Skill,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, one implementation per content mode)
// ──────────────────────────────────────────────────────────
//
// "No data" is a normal answer: empty collections and `None` singletons are
// returned as `Ok`, never as errors.
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn get_profile(&self) -> Result<Option<Profile>, ContentQueryError>;

    async fn get_projects(&self) -> Result<Vec<Project>, ContentQueryError>;

    async fn get_project(&self, id: &str) -> Result<Option<Project>, ContentQueryError>;

    async fn get_education(&self) -> Result<Vec<Education>, ContentQueryError>;

    async fn get_experience(&self) -> Result<Vec<Experience>, ContentQueryError>;

    async fn get_skills(&self) -> Result<Vec<Skill>, ContentQueryError>;

    async fn get_certifications(&self) -> Result<Vec<Certification>, ContentQueryError>;

    async fn get_settings(&self) -> Result<Option<SiteSettings>, ContentQueryError>;

    /// All collections the skill ranking needs, assembled in one document.
    async fn get_content(&self) -> Result<PortfolioContent, ContentQueryError> {
        Ok(PortfolioContent {
            profile: self.get_profile().await?,
            projects: self.get_projects().await?,
            education: self.get_education().await?,
            experience: self.get_experience().await?,
            skills: self.get_skills().await?,
            certifications: self.get_certifications().await?,
        })
    }
}
