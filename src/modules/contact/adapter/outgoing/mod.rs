pub mod contact_message_repository_local;
pub mod contact_message_repository_postgres;
pub mod sea_orm_entity;

pub use contact_message_repository_local::ContactMessageRepositoryLocal;
pub use contact_message_repository_postgres::ContactMessageRepositoryPostgres;
