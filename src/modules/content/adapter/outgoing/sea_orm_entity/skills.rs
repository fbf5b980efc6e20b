use sea_orm::entity::prelude::*;

use crate::content::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    pub icon: Option<String>,
    pub display_order: i32,
}

impl Model {
    pub fn to_domain(self) -> Skill {
        Skill {
            id: self.id.to_string(),
            name: self.name,
            category: self.category,
            proficiency: self.proficiency.clamp(0, 100) as u8,
            icon: self.icon,
            display_order: self.display_order,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
