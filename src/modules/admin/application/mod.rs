pub mod content_admin_service;

pub use content_admin_service::{ContentAdminError, ContentAdminService};
