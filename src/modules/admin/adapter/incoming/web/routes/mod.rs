pub mod content_collections;
pub mod content_singletons;

pub use content_collections::{
    create_content_record_handler, delete_content_record_handler, list_content_records_handler,
    refresh_content_collection_handler, update_content_record_handler,
};
pub use content_singletons::{save_profile_handler, save_settings_handler};

use actix_web::HttpResponse;
use tracing::error;

use crate::admin::application::ContentAdminError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_admin_error(err: ContentAdminError) -> HttpResponse {
    match err {
        ContentAdminError::NotFound => ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found"),
        ContentAdminError::DuplicateId(_) => ApiResponse::conflict("DUPLICATE_ID", &err.to_string()),
        ContentAdminError::DuplicateName(_) => {
            ApiResponse::conflict("DUPLICATE_NAME", &err.to_string())
        }
        ContentAdminError::Validation(errors) => ApiResponse::validation_error(&errors),
        ContentAdminError::InvalidRecord(msg) => ApiResponse::bad_request("INVALID_RECORD", &msg),
        ContentAdminError::Store(msg) => {
            error!("Content store write failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
