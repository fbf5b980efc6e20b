use sea_orm::entity::prelude::*;

use crate::content::domain::entities::SiteSettings;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub footer_text: Option<String>,
    pub show_blog: bool,
    pub show_contact_form: bool,
    pub maintenance_mode: bool,
}

impl Model {
    pub fn to_domain(self) -> SiteSettings {
        SiteSettings {
            site_title: self.site_title,
            site_description: self.site_description,
            footer_text: self.footer_text,
            show_blog: self.show_blog,
            show_contact_form: self.show_contact_form,
            maintenance_mode: self.maintenance_mode,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
