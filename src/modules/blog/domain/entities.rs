use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
    pub cover_image_url: Option<String>,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub google_docs_url: Option<String>,
    pub embed_code: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

/// Body of a blog save. With an `id` that exists it updates that post and
/// only the fields present here change; otherwise it creates one.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SaveBlogPostInput {
    pub id: Option<String>,
    /// Replaces the stored slug when given.
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    /// New posts default to draft.
    pub status: Option<BlogStatus>,
    pub cover_image_url: Option<String>,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub google_docs_url: Option<String>,
    pub embed_code: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image_url: Option<String>,
}

/// Visual overrides for one page, keyed by `page_path`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PageCustomization {
    pub id: String,
    pub page_path: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    #[serde(default)]
    pub hidden_nav_links: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement for the customization of `page_path`. Fields left out
/// are cleared on save.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SavePageCustomizationInput {
    #[serde(default)]
    pub page_path: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    #[serde(default)]
    pub hidden_nav_links: Vec<String>,
}
