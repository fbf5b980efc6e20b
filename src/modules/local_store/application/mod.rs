pub mod local_crud;
pub mod local_document;
pub mod ports;
pub mod typed_store;

pub use local_crud::{CrudItem, LocalCrud, LocalCrudError};
pub use local_document::LocalDocument;
pub use typed_store::TypedStore;
