use async_trait::async_trait;

use crate::blog::application::{BlogStoreError, BlogUseCases};
use crate::blog::domain::entities::{
    BlogPost, PageCustomization, SaveBlogPostInput, SavePageCustomizationInput,
};
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::contact::domain::entities::ContactMessage;
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::local_store::application::ports::outgoing::StoreError;
use crate::content::domain::entities::{
    Certification, Education, Experience, Profile, Project, SiteSettings, Skill,
};
use crate::skills::application::ports::incoming::use_cases::{
    GetSkillRankingError, GetSkillRankingUseCase,
};
use crate::skills::domain::ranking::SkillRanking;

// ============================================================================
// Content
// ============================================================================

/// Fixed content. With `fail` set, every query returns that error.
#[derive(Default, Clone)]
pub struct StubContentQuery {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub settings: Option<SiteSettings>,
    pub fail: Option<ContentQueryError>,
}

impl StubContentQuery {
    pub fn failing(err: ContentQueryError) -> Self {
        Self {
            fail: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ContentQueryError> {
        match &self.fail {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentQuery for StubContentQuery {
    async fn get_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        self.check()?;
        Ok(self.profile.clone())
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        self.check()?;
        Ok(self.projects.clone())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, ContentQueryError> {
        self.check()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_education(&self) -> Result<Vec<Education>, ContentQueryError> {
        self.check()?;
        Ok(self.education.clone())
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        self.check()?;
        Ok(self.experience.clone())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn get_certifications(&self) -> Result<Vec<Certification>, ContentQueryError> {
        self.check()?;
        Ok(self.certifications.clone())
    }

    async fn get_settings(&self) -> Result<Option<SiteSettings>, ContentQueryError> {
        self.check()?;
        Ok(self.settings.clone())
    }
}

// ============================================================================
// Skills
// ============================================================================

pub struct StubGetSkillRankingUseCase {
    result: Result<SkillRanking, GetSkillRankingError>,
}

impl StubGetSkillRankingUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSkillRankingError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSkillRankingUseCase for StubGetSkillRankingUseCase {
    async fn execute(&self) -> Result<SkillRanking, GetSkillRankingError> {
        self.result.clone()
    }
}

// ============================================================================
// Contact
// ============================================================================

pub struct StubSubmitContactMessageUseCase {
    result: Result<ContactMessage, SubmitContactMessageError>,
}

impl StubSubmitContactMessageUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(SubmitContactMessageError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        _command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        self.result.clone()
    }
}

// ============================================================================
// Blog
// ============================================================================

/// Empty blog whose writes all fail with a backend error.
pub struct StubBlogUseCases {
    error: StoreError,
}

impl StubBlogUseCases {
    pub fn failing_writes(msg: &str) -> Self {
        Self {
            error: StoreError::Backend(msg.to_string()),
        }
    }
}

#[async_trait]
impl BlogUseCases for StubBlogUseCases {
    async fn get_blog_posts(&self) -> Vec<BlogPost> {
        Vec::new()
    }

    async fn get_published_blog_posts(&self) -> Vec<BlogPost> {
        Vec::new()
    }

    async fn get_blog_post_by_slug(&self, _slug: &str) -> Option<BlogPost> {
        None
    }

    async fn get_blog_post_by_id(&self, _id: &str) -> Option<BlogPost> {
        None
    }

    async fn save_blog_post(&self, _input: SaveBlogPostInput) -> Result<BlogPost, BlogStoreError> {
        Err(BlogStoreError::Store(self.error.clone()))
    }

    async fn delete_blog_post(&self, _id: &str) -> Result<bool, StoreError> {
        Err(self.error.clone())
    }

    async fn get_page_customizations(&self) -> Vec<PageCustomization> {
        Vec::new()
    }

    async fn get_page_customization(&self, _page_path: &str) -> Option<PageCustomization> {
        None
    }

    async fn save_page_customization(
        &self,
        _input: SavePageCustomizationInput,
    ) -> Result<PageCustomization, BlogStoreError> {
        Err(BlogStoreError::Store(self.error.clone()))
    }

    async fn delete_page_customization(&self, _page_path: &str) -> Result<bool, StoreError> {
        Err(self.error.clone())
    }
}
