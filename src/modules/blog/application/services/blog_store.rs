use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::blog::application::ports::incoming::use_cases::{BlogStoreError, BlogUseCases};
use crate::blog::domain::entities::{
    BlogPost, BlogStatus, PageCustomization, SaveBlogPostInput, SavePageCustomizationInput,
};
use crate::blog::domain::slug::Slugger;
use crate::local_store::application::ports::outgoing::StoreError;
use crate::local_store::application::TypedStore;
use crate::local_store::storage_keys;
use crate::shared::validation::{check_length, ValidationErrors};

const MAX_TITLE_LEN: usize = 200;

/// Blog posts and page customizations, each kept as one JSON array in the
/// key/value store. Reads always go to the store.
pub struct BlogStore {
    store: TypedStore,
    slugger: Slugger,
}

impl BlogStore {
    pub fn new(store: TypedStore, slugger: Slugger) -> Self {
        Self { store, slugger }
    }
}

#[async_trait]
impl BlogUseCases for BlogStore {
    // ---------------------------------------------------------------
    // Blog posts
    // ---------------------------------------------------------------

    async fn get_blog_posts(&self) -> Vec<BlogPost> {
        self.store
            .get_or(storage_keys::BLOG_POSTS, Vec::new())
            .await
    }

    async fn get_published_blog_posts(&self) -> Vec<BlogPost> {
        self.get_blog_posts()
            .await
            .into_iter()
            .filter(BlogPost::is_published)
            .collect()
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.get_blog_posts()
            .await
            .into_iter()
            .find(|post| post.slug == slug && post.is_published())
    }

    async fn get_blog_post_by_id(&self, id: &str) -> Option<BlogPost> {
        self.get_blog_posts()
            .await
            .into_iter()
            .find(|post| post.id == id)
    }

    /// A known `id` keeps that post's slug (unless one is supplied) and
    /// `created_at`, and fields absent from `input` keep their stored value.
    /// Anything else inserts a new post with a fresh id and a slug derived
    /// from the title.
    async fn save_blog_post(&self, input: SaveBlogPostInput) -> Result<BlogPost, BlogStoreError> {
        validate_blog_post(&input)?;

        let now = Utc::now();
        let mut posts = self.get_blog_posts().await;
        let existing = input
            .id
            .as_deref()
            .and_then(|id| posts.iter().position(|post| post.id == id));

        let explicit_slug = input
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_string);

        let saved = match existing {
            Some(index) => {
                let mut post = posts[index].clone();
                if let Some(slug) = explicit_slug {
                    post.slug = slug;
                }
                merge_input(&mut post, input);
                post.published_at = published_at(post.published_at, post.status, now);
                post.updated_at = now;
                posts[index] = post.clone();
                post
            }
            None => {
                let mut post = BlogPost {
                    id: Uuid::new_v4().to_string(),
                    slug: explicit_slug.unwrap_or_else(|| self.slugger.slugify(&input.title)),
                    title: String::new(),
                    content: String::new(),
                    excerpt: None,
                    category: None,
                    tags: Vec::new(),
                    status: BlogStatus::default(),
                    cover_image_url: None,
                    video_url: None,
                    pdf_url: None,
                    google_docs_url: None,
                    embed_code: None,
                    meta_title: None,
                    meta_description: None,
                    og_image_url: None,
                    created_at: now,
                    updated_at: now,
                    published_at: None,
                };
                merge_input(&mut post, input);
                post.published_at = published_at(None, post.status, now);
                posts.push(post.clone());
                post
            }
        };

        self.store.set(storage_keys::BLOG_POSTS, &posts).await?;
        info!(post_id = %saved.id, slug = %saved.slug, "Blog post saved");
        Ok(saved)
    }

    async fn delete_blog_post(&self, id: &str) -> Result<bool, StoreError> {
        let posts = self.get_blog_posts().await;
        let before = posts.len();
        let remaining: Vec<BlogPost> = posts.into_iter().filter(|post| post.id != id).collect();
        let removed = remaining.len() != before;

        self.store.set(storage_keys::BLOG_POSTS, &remaining).await?;
        Ok(removed)
    }

    // ---------------------------------------------------------------
    // Page customizations
    // ---------------------------------------------------------------

    async fn get_page_customizations(&self) -> Vec<PageCustomization> {
        self.store
            .get_or(storage_keys::PAGE_CUSTOMIZATIONS, Vec::new())
            .await
    }

    async fn get_page_customization(&self, page_path: &str) -> Option<PageCustomization> {
        self.get_page_customizations()
            .await
            .into_iter()
            .find(|c| c.page_path == page_path)
    }

    /// Fields missing from `input` end up cleared.
    async fn save_page_customization(
        &self,
        input: SavePageCustomizationInput,
    ) -> Result<PageCustomization, BlogStoreError> {
        validate_page_path(&input.page_path)?;

        let mut customizations = self.get_page_customizations().await;
        let existing = customizations
            .iter()
            .position(|c| c.page_path == input.page_path);

        let id = existing
            .map(|index| customizations[index].id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let saved = PageCustomization {
            id,
            page_path: input.page_path,
            primary_color: input.primary_color,
            secondary_color: input.secondary_color,
            accent_color: input.accent_color,
            background_color: input.background_color,
            text_color: input.text_color,
            heading_font: input.heading_font,
            body_font: input.body_font,
            hidden_nav_links: input.hidden_nav_links,
            updated_at: Utc::now(),
        };

        match existing {
            Some(index) => customizations[index] = saved.clone(),
            None => customizations.push(saved.clone()),
        }

        self.store
            .set(storage_keys::PAGE_CUSTOMIZATIONS, &customizations)
            .await?;
        Ok(saved)
    }

    async fn delete_page_customization(&self, page_path: &str) -> Result<bool, StoreError> {
        let customizations = self.get_page_customizations().await;
        let before = customizations.len();
        let remaining: Vec<PageCustomization> = customizations
            .into_iter()
            .filter(|c| c.page_path != page_path)
            .collect();
        let removed = remaining.len() != before;

        self.store
            .set(storage_keys::PAGE_CUSTOMIZATIONS, &remaining)
            .await?;
        Ok(removed)
    }
}

fn published_at(
    current: Option<DateTime<Utc>>,
    status: BlogStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (current, status) {
        (Some(at), _) => Some(at),
        (None, BlogStatus::Published) => Some(now),
        (None, BlogStatus::Draft) => None,
    }
}

/// Copies the fields present in `input` onto `post`. Absent optional fields
/// keep the stored value.
fn merge_input(post: &mut BlogPost, input: SaveBlogPostInput) {
    post.title = input.title.trim().to_string();

    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(tags) = input.tags {
        post.tags = tags;
    }
    if let Some(status) = input.status {
        post.status = status;
    }

    let optional_fields = [
        (&mut post.excerpt, input.excerpt),
        (&mut post.category, input.category),
        (&mut post.cover_image_url, input.cover_image_url),
        (&mut post.video_url, input.video_url),
        (&mut post.pdf_url, input.pdf_url),
        (&mut post.google_docs_url, input.google_docs_url),
        (&mut post.embed_code, input.embed_code),
        (&mut post.meta_title, input.meta_title),
        (&mut post.meta_description, input.meta_description),
        (&mut post.og_image_url, input.og_image_url),
    ];
    for (stored, given) in optional_fields {
        if given.is_some() {
            *stored = given;
        }
    }
}

fn validate_blog_post(input: &SaveBlogPostInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_length(&mut errors, "title", &input.title, 1, MAX_TITLE_LEN);
    errors.into_result()
}

fn validate_page_path(page_path: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !page_path.starts_with('/') {
        errors.add("page_path", "page_path must start with '/'");
    }
    errors.into_result()
}
