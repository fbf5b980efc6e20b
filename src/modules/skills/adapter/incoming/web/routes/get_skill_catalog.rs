use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Master skill catalog, for skill pickers.
#[utoipa::path(get, path = "/api/skills/catalog", tag = "skills",
    responses((status = 200, description = "Catalog entries, possibly empty")))]
#[get("/api/skills/catalog")]
pub async fn get_skill_catalog_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(&data.skill_catalog.skills)
}
