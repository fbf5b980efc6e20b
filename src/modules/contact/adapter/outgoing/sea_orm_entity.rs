use sea_orm::entity::prelude::*;

use crate::contact::domain::entities::ContactMessage;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> ContactMessage {
        ContactMessage {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
