pub mod manage_blog;

pub use manage_blog::{BlogStoreError, BlogUseCases};
