use sea_orm::entity::prelude::*;

use super::string_list;
use crate::content::application::ports::outgoing::ContentQueryError;
use crate::content::domain::entities::{Project, ProjectCategory};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub github_url: Option<String>,
    pub google_docs_url: Option<String>,
    pub google_sheets_url: Option<String>,
    pub pdf_url: Option<String>,
    pub external_url: Option<String>,
    pub embed_code: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub tags: Json,
    pub skills_used: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> Result<Project, ContentQueryError> {
        Ok(Project {
            tags: string_list(&self.tags)?,
            skills_used: string_list(&self.skills_used)?,
            id: self.id.to_string(),
            title: self.title,
            description: self.description,
            short_description: self.short_description,
            category: ProjectCategory::from_str_lossy(&self.category),
            thumbnail_url: self.thumbnail_url,
            github_url: self.github_url,
            google_docs_url: self.google_docs_url,
            google_sheets_url: self.google_sheets_url,
            pdf_url: self.pdf_url,
            external_url: self.external_url,
            embed_code: self.embed_code,
            is_featured: self.is_featured,
            display_order: self.display_order,
            created_at: Some(self.created_at.into()),
            updated_at: Some(self.updated_at.into()),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
