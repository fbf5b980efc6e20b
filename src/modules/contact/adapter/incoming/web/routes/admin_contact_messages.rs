use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::contact::application::ports::incoming::use_cases::ContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactMessageRequest {
    pub is_read: bool,
}

fn map_messages_error(err: ContactMessagesError) -> HttpResponse {
    match err {
        ContactMessagesError::NotFound => {
            ApiResponse::not_found("CONTACT_MESSAGE_NOT_FOUND", "Contact message not found")
        }
        ContactMessagesError::RepositoryError(msg) => {
            error!("Contact message repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "admin",
    responses(
        (status = 200, description = "Inbox, newest first", body = [crate::contact::domain::entities::ContactMessage]),
        (status = 500, description = "Repository failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/admin/messages")]
pub async fn get_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact_messages.list().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => map_messages_error(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/messages/{message_id}",
    tag = "admin",
    params(("message_id" = String, Path, description = "Message id")),
    request_body = UpdateContactMessageRequest,
    responses(
        (status = 200, description = "Updated message", body = crate::contact::domain::entities::ContactMessage),
        (status = 404, description = "No message with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[patch("/api/admin/messages/{message_id}")]
pub async fn update_contact_message_handler(
    path: web::Path<String>,
    payload: web::Json<UpdateContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data
        .contact_messages
        .set_read(&message_id, payload.is_read)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(e) => map_messages_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{message_id}",
    tag = "admin",
    params(("message_id" = String, Path, description = "Message id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No message with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/admin/messages/{message_id}")]
pub async fn delete_contact_message_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.contact_messages.delete(&message_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_messages_error(e),
    }
}
