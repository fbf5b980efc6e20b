pub mod blog_store;

pub use blog_store::BlogStore;
