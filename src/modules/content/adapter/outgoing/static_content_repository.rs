use std::sync::Arc;

use async_trait::async_trait;

use crate::content::adapter::outgoing::static_content_loader::StaticContentLoader;
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::content::domain::entities::{
    Certification, Education, Experience, Profile, Project, SiteSettings, Skill,
};
use crate::local_store::application::{LocalCrud, LocalDocument, TypedStore};
use crate::local_store::storage_keys;

/// Locally persisted content, seeded from the static JSON files.
///
/// Shared between the static-mode read path and the admin handlers, so an
/// admin write is visible to the next public read.
pub struct LocalContentStores {
    pub profile: LocalDocument<Profile>,
    pub projects: LocalCrud<Project>,
    pub education: LocalCrud<Education>,
    pub experience: LocalCrud<Experience>,
    pub skills: LocalCrud<Skill>,
    pub certifications: LocalCrud<Certification>,
    pub settings: LocalDocument<SiteSettings>,
}

impl LocalContentStores {
    pub async fn seeded(store: TypedStore, loader: &StaticContentLoader) -> Self {
        let (profile, projects, education, experience, skills, certifications, settings) = tokio::join!(
            loader.load_profile(),
            loader.load_projects(),
            loader.load_education(),
            loader.load_experience(),
            loader.load_skills(),
            loader.load_certifications(),
            loader.load_settings(),
        );

        Self {
            profile: LocalDocument::new(store.clone(), storage_keys::PROFILE, profile),
            projects: LocalCrud::open(store.clone(), storage_keys::PROJECTS, projects).await,
            education: LocalCrud::open(store.clone(), storage_keys::EDUCATION, education).await,
            experience: LocalCrud::open(store.clone(), storage_keys::EXPERIENCE, experience).await,
            skills: LocalCrud::open(store.clone(), storage_keys::SKILLS, skills).await,
            certifications: LocalCrud::open(
                store.clone(),
                storage_keys::CERTIFICATIONS,
                certifications,
            )
            .await,
            settings: LocalDocument::new(store, storage_keys::SETTINGS, settings),
        }
    }
}

/// Static-mode `ContentQuery`.
#[derive(Clone)]
pub struct StaticContentRepository {
    stores: Arc<LocalContentStores>,
}

impl StaticContentRepository {
    pub fn new(stores: Arc<LocalContentStores>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl ContentQuery for StaticContentRepository {
    async fn get_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        Ok(self.stores.profile.get().await)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        Ok(self.stores.projects.get().await)
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, ContentQueryError> {
        Ok(self.stores.projects.find(id).await)
    }

    async fn get_education(&self) -> Result<Vec<Education>, ContentQueryError> {
        Ok(self.stores.education.get().await)
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        Ok(self.stores.experience.get().await)
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        Ok(self.stores.skills.get().await)
    }

    async fn get_certifications(&self) -> Result<Vec<Certification>, ContentQueryError> {
        Ok(self.stores.certifications.get().await)
    }

    async fn get_settings(&self) -> Result<Option<SiteSettings>, ContentQueryError> {
        Ok(self.stores.settings.get().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::static_content_loader::PROJECTS_FILE;
    use crate::local_store::adapter::outgoing::InMemoryKeyValueStore;
    use serde_json::json;

    async fn repository_with_projects(body: &str) -> (StaticContentRepository, Arc<LocalContentStores>) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECTS_FILE), body).unwrap();

        let store = TypedStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let stores = Arc::new(
            LocalContentStores::seeded(store, &StaticContentLoader::new(dir.path())).await,
        );

        (StaticContentRepository::new(Arc::clone(&stores)), stores)
    }

    #[tokio::test]
    async fn test_reads_seed_from_static_files() {
        let (repo, _) = repository_with_projects(r#"[{ "id": "p1", "title": "Seeded" }]"#).await;

        let projects = repo.get_projects().await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Seeded");
        assert!(repo.get_profile().await.unwrap().is_none());
        assert!(repo.get_skills().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_writes_are_visible_to_reads() {
        let (repo, stores) =
            repository_with_projects(r#"[{ "id": "p1", "title": "Seeded" }]"#).await;

        let changes = json!({ "title": "Edited" }).as_object().cloned().unwrap();
        stores.projects.update("p1", &changes).await.unwrap();

        let project = repo.get_project("p1").await.unwrap().unwrap();
        assert_eq!(project.title, "Edited");

        stores.projects.remove("p1").await.unwrap();
        assert!(repo.get_project("p1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_content_document_collects_every_collection() {
        let (repo, stores) = repository_with_projects(r#"[{ "id": "p1", "title": "A" }]"#).await;
        stores
            .skills
            .add(Skill {
                id: "s1".to_string(),
                name: "Python".to_string(),
                category: "Programming".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let content = repo.get_content().await.unwrap();

        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.skills.len(), 1);
        assert!(content.education.is_empty());
    }
}
