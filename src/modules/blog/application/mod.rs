pub mod ports;
pub mod services;

pub use ports::incoming::use_cases::{BlogStoreError, BlogUseCases};
pub use services::BlogStore;
