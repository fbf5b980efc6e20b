use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::content::domain::entities::{
    Certification, Education, Experience, Profile, Project, SiteSettings, Skill,
};

pub const PROFILE_FILE: &str = "profile.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const EDUCATION_FILE: &str = "education.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const CERTIFICATIONS_FILE: &str = "certifications.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Reads the pre-built JSON content files.
///
/// Never fails: a missing, unreadable or malformed file is logged and read as
/// "no data" (empty list, `None` singleton).
#[derive(Debug, Clone)]
pub struct StaticContentLoader {
    content_dir: PathBuf,
}

impl StaticContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }


    pub async fn load_profile(&self) -> Option<Profile> {
        self.load_json(PROFILE_FILE).await
    }

    pub async fn load_projects(&self) -> Vec<Project> {
        self.load_json(PROJECTS_FILE).await.unwrap_or_default()
    }

    /// Linear search over the full collection.
    pub async fn load_project(&self, id: &str) -> Option<Project> {
        self.load_projects()
            .await
            .into_iter()
            .find(|project| project.id == id)
    }

    pub async fn load_education(&self) -> Vec<Education> {
        self.load_json(EDUCATION_FILE).await.unwrap_or_default()
    }

    pub async fn load_experience(&self) -> Vec<Experience> {
        self.load_json(EXPERIENCE_FILE).await.unwrap_or_default()
    }

    pub async fn load_skills(&self) -> Vec<Skill> {
        self.load_json(SKILLS_FILE).await.unwrap_or_default()
    }

    pub async fn load_certifications(&self) -> Vec<Certification> {
        self.load_json(CERTIFICATIONS_FILE).await.unwrap_or_default()
    }

    pub async fn load_settings(&self) -> Option<SiteSettings> {
        self.load_json(SETTINGS_FILE).await
    }

    async fn load_json<T: DeserializeOwned>(&self, file_name: &str) -> Option<T> {
        let path = self.content_dir.join(file_name);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error loading static content");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error parsing static content");
                None
            }
        }
    }
}
