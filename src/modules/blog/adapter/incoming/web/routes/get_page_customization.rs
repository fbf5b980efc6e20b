use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
pub struct PagePathQuery {
    /// Page path, e.g. `/` or `/blog`
    pub path: String,
}

/// Answers `null` data when the page has no customization.
#[utoipa::path(
    get,
    path = "/api/pages/customization",
    tag = "blog",
    params(PagePathQuery),
    responses(
        (status = 200, description = "Customization for the page, or null", body = Option<crate::blog::domain::entities::PageCustomization>)
    )
)]
#[get("/api/pages/customization")]
pub async fn get_page_customization_handler(
    query: web::Query<PagePathQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.blog.get_page_customization(&query.path).await)
}
