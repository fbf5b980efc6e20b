use sea_orm::entity::prelude::*;

use super::string_list;
use crate::content::application::ports::outgoing::ContentQueryError;
use crate::content::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub skills_used: Json,
    pub display_order: i32,
}

impl Model {
    pub fn to_domain(self) -> Result<Experience, ContentQueryError> {
        Ok(Experience {
            skills_used: string_list(&self.skills_used)?,
            id: self.id.to_string(),
            company: self.company,
            position: self.position,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            description: self.description,
            display_order: self.display_order,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
