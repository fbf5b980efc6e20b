pub mod admin_blog_posts;
pub mod admin_page_customizations;
pub mod get_blog_posts;
pub mod get_page_customization;

pub use admin_blog_posts::{
    delete_blog_post_handler, get_admin_blog_post_handler, get_admin_blog_posts_handler,
    save_blog_post_handler,
};
pub use admin_page_customizations::{
    delete_page_customization_handler, get_page_customizations_handler,
    save_page_customization_handler,
};
pub use get_blog_posts::{get_blog_post_by_slug_handler, get_published_blog_posts_handler};
pub use get_page_customization::{get_page_customization_handler, PagePathQuery};

use actix_web::HttpResponse;
use tracing::error;

use crate::blog::application::BlogStoreError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_blog_store_error(context: &str, err: BlogStoreError) -> HttpResponse {
    match err {
        BlogStoreError::Validation(errors) => ApiResponse::validation_error(&errors),
        BlogStoreError::Store(e) => {
            error!(error = %e, context, "Blog store write failed");
            ApiResponse::internal_error()
        }
    }
}
