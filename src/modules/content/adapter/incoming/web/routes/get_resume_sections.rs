use actix_web::{get, web, Responder};

use super::map_content_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(get, path = "/api/education", tag = "content",
    responses((status = 200, description = "Education entries, possibly empty")))]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_education().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_content_error("education", e),
    }
}

#[utoipa::path(get, path = "/api/experience", tag = "content",
    responses((status = 200, description = "Experience entries, possibly empty")))]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_experience().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_content_error("experience", e),
    }
}

#[utoipa::path(get, path = "/api/skills", tag = "content",
    responses((status = 200, description = "Declared skills, possibly empty")))]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_skills().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_content_error("skills", e),
    }
}

#[utoipa::path(get, path = "/api/certifications", tag = "content",
    responses((status = 200, description = "Certifications, possibly empty")))]
#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_certifications().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => map_content_error("certifications", e),
    }
}
