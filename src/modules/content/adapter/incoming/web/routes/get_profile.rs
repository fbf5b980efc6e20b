use actix_web::{get, web, Responder};

use super::map_content_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Site owner profile; `data` is `null` when none is configured.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Profile, or null when absent"),
        (status = 500, description = "Content backend failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_profile().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_content_error("profile", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "content",
    responses(
        (status = 200, description = "Site settings, or null when absent"),
        (status = 500, description = "Content backend failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_settings().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(e) => map_content_error("settings", e),
    }
}
