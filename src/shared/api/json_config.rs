use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, QueryConfig};

use crate::shared::api::ApiResponse;

/// Malformed or mistyped JSON bodies answer in the standard envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            InternalError::from_response(err, ApiResponse::bad_request("INVALID_BODY", &message))
                .into()
        })
}

/// Missing or malformed query strings (`?path=` and friends).
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("INVALID_QUERY", &message))
            .into()
    })
}
