use async_trait::async_trait;

use crate::blog::domain::entities::{
    BlogPost, PageCustomization, SaveBlogPostInput, SavePageCustomizationInput,
};
use crate::local_store::application::ports::outgoing::StoreError;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Blog posts and per-page customizations.
#[async_trait]
pub trait BlogUseCases: Send + Sync {
    async fn get_blog_posts(&self) -> Vec<BlogPost>;

    async fn get_published_blog_posts(&self) -> Vec<BlogPost>;

    /// Drafts are never returned here.
    async fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost>;

    async fn get_blog_post_by_id(&self, id: &str) -> Option<BlogPost>;

    /// Upsert. A known `id` merges the given fields into that post; anything
    /// else inserts a new post.
    async fn save_blog_post(&self, input: SaveBlogPostInput) -> Result<BlogPost, BlogStoreError>;

    /// Returns whether a post was removed.
    async fn delete_blog_post(&self, id: &str) -> Result<bool, StoreError>;

    async fn get_page_customizations(&self) -> Vec<PageCustomization>;

    async fn get_page_customization(&self, page_path: &str) -> Option<PageCustomization>;

    /// Upsert by `page_path`, replacing the stored record as a whole.
    async fn save_page_customization(
        &self,
        input: SavePageCustomizationInput,
    ) -> Result<PageCustomization, BlogStoreError>;

    async fn delete_page_customization(&self, page_path: &str) -> Result<bool, StoreError>;
}
