use sea_orm::entity::prelude::*;

use super::string_list;
use crate::content::application::ports::outgoing::ContentQueryError;
use crate::content::domain::entities::Education;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub skills_used: Json,
    pub display_order: i32,
}

impl Model {
    pub fn to_domain(self) -> Result<Education, ContentQueryError> {
        Ok(Education {
            skills_used: string_list(&self.skills_used)?,
            id: self.id.to_string(),
            institution: self.institution,
            degree: self.degree,
            field_of_study: self.field_of_study,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            display_order: self.display_order,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
