use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldError;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Request validation failed")]
    pub message: String,

    /// Per-field messages, only on validation failures
    pub fields: Option<Vec<FieldError>>,
}
