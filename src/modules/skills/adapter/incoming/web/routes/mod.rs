pub mod get_skill_catalog;
pub mod get_skill_ranking;

pub use get_skill_catalog::get_skill_catalog_handler;
pub use get_skill_ranking::get_skill_ranking_handler;
