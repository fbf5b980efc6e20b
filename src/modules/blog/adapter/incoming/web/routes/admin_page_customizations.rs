use actix_web::{delete, get, put, web, Responder};
use tracing::error;

use super::{map_blog_store_error, PagePathQuery};
use crate::blog::domain::entities::SavePageCustomizationInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/pages",
    tag = "admin",
    responses(
        (status = 200, description = "All page customizations", body = [crate::blog::domain::entities::PageCustomization])
    )
)]
#[get("/api/admin/pages")]
pub async fn get_page_customizations_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.get_page_customizations().await)
}

#[utoipa::path(
    put,
    path = "/api/admin/pages",
    tag = "admin",
    request_body = SavePageCustomizationInput,
    responses(
        (status = 200, description = "Stored customization", body = crate::blog::domain::entities::PageCustomization),
        (status = 400, description = "Invalid page path", body = crate::api::schemas::ErrorResponse)
    )
)]
#[put("/api/admin/pages")]
pub async fn save_page_customization_handler(
    payload: web::Json<SavePageCustomizationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.save_page_customization(payload.into_inner()).await {
        Ok(customization) => ApiResponse::success(customization),
        Err(e) => map_blog_store_error("save_page_customization", e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/pages",
    tag = "admin",
    params(PagePathQuery),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No customization for that path", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/admin/pages")]
pub async fn delete_page_customization_handler(
    query: web::Query<PagePathQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.delete_page_customization(&query.path).await {
        Ok(true) => ApiResponse::no_content(),
        Ok(false) => ApiResponse::not_found(
            "PAGE_CUSTOMIZATION_NOT_FOUND",
            "No customization for that page",
        ),
        Err(e) => {
            error!(error = %e, page_path = %query.path, "Failed to delete page customization");
            ApiResponse::internal_error()
        }
    }
}
