mod skill_catalog_file;

pub use skill_catalog_file::load_skill_catalog;
