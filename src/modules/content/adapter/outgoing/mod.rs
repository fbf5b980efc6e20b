pub mod content_query_postgres;
pub mod sea_orm_entity;
pub mod static_content_loader;
pub mod static_content_repository;

pub use content_query_postgres::ContentQueryPostgres;
pub use static_content_loader::StaticContentLoader;
pub use static_content_repository::{LocalContentStores, StaticContentRepository};
