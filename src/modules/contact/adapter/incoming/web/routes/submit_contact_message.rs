use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = crate::contact::domain::entities::ContactMessage),
        (status = 400, description = "One or more fields are invalid", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Message could not be stored", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    payload: web::Json<SubmitContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command =
        match SubmitContactMessageCommand::new(&payload.name, &payload.email, &payload.message) {
            Ok(cmd) => cmd,
            Err(errors) => return ApiResponse::validation_error(&errors),
        };

    match data.submit_contact_message.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
