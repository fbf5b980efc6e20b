use actix_web::{put, web, Responder};

use super::map_admin_error;
use crate::content::domain::entities::{Profile, SiteSettings};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "admin",
    request_body = Object,
    responses(
        (status = 200, description = "Stored profile"),
        (status = 400, description = "Invalid profile", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Content is database-backed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[put("/api/admin/profile")]
pub async fn save_profile_handler(
    payload: web::Json<Profile>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };

    match admin.save_profile(payload.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_admin_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = "admin",
    request_body = Object,
    responses(
        (status = 200, description = "Stored settings"),
        (status = 409, description = "Content is database-backed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[put("/api/admin/settings")]
pub async fn save_settings_handler(
    payload: web::Json<SiteSettings>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };

    match admin.save_settings(payload.into_inner()).await {
        Ok(settings) => ApiResponse::success(settings),
        Err(e) => map_admin_error(e),
    }
}
