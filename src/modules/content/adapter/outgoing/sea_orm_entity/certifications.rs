use sea_orm::entity::prelude::*;

use super::string_list;
use crate::content::application::ports::outgoing::ContentQueryError;
use crate::content::domain::entities::Certification;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub skills_used: Json,
    pub display_order: i32,
}

impl Model {
    pub fn to_domain(self) -> Result<Certification, ContentQueryError> {
        Ok(Certification {
            skills_used: string_list(&self.skills_used)?,
            id: self.id.to_string(),
            name: self.name,
            issuer: self.issuer,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            credential_url: self.credential_url,
            description: self.description,
            display_order: self.display_order,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
