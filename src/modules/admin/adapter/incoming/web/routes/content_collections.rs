use actix_web::{delete, get, patch, post, web, Responder};
use serde_json::{Map, Value};

use super::map_admin_error;
use crate::admin::domain::ContentCollection;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Paths are restricted to the known collection names so they never shadow
// `/api/admin/blog`, `/api/admin/pages` and friends.

fn collection(raw: &str) -> Option<ContentCollection> {
    ContentCollection::parse(raw)
}

#[utoipa::path(
    get,
    path = "/api/admin/{collection}",
    tag = "admin",
    params(("collection" = String, Path, description = "projects | education | experience | skills | certifications")),
    responses(
        (status = 200, description = "Every record of the collection"),
        (status = 409, description = "Content is database-backed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/admin/{collection:projects|education|experience|skills|certifications}")]
pub async fn list_content_records_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };
    let Some(collection) = collection(&path) else {
        return ApiResponse::not_found("UNKNOWN_COLLECTION", "Unknown collection");
    };

    match admin.list(collection).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => map_admin_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/{collection}",
    tag = "admin",
    params(("collection" = String, Path, description = "projects | education | experience | skills | certifications")),
    request_body = Object,
    responses(
        (status = 201, description = "Created record"),
        (status = 400, description = "Invalid record", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Duplicate id or name, or database-backed content", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/{collection:projects|education|experience|skills|certifications}")]
pub async fn create_content_record_handler(
    path: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };
    let Some(collection) = collection(&path) else {
        return ApiResponse::not_found("UNKNOWN_COLLECTION", "Unknown collection");
    };

    match admin.create(collection, payload.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => map_admin_error(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/{collection}/{record_id}",
    tag = "admin",
    params(
        ("collection" = String, Path, description = "projects | education | experience | skills | certifications"),
        ("record_id" = String, Path, description = "Record id")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Updated record"),
        (status = 404, description = "No record with that id", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Name already used by another record", body = crate::api::schemas::ErrorResponse)
    )
)]
#[patch("/api/admin/{collection:projects|education|experience|skills|certifications}/{record_id}")]
pub async fn update_content_record_handler(
    path: web::Path<(String, String)>,
    payload: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };
    let (raw_collection, record_id) = path.into_inner();
    let Some(collection) = collection(&raw_collection) else {
        return ApiResponse::not_found("UNKNOWN_COLLECTION", "Unknown collection");
    };

    match admin.update(collection, &record_id, &payload).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => map_admin_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/{collection}/{record_id}",
    tag = "admin",
    params(
        ("collection" = String, Path, description = "projects | education | experience | skills | certifications"),
        ("record_id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No record with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/admin/{collection:projects|education|experience|skills|certifications}/{record_id}")]
pub async fn delete_content_record_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };
    let (raw_collection, record_id) = path.into_inner();
    let Some(collection) = collection(&raw_collection) else {
        return ApiResponse::not_found("UNKNOWN_COLLECTION", "Unknown collection");
    };

    match admin.delete(collection, &record_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_admin_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/{collection}/refresh",
    tag = "admin",
    params(("collection" = String, Path, description = "projects | education | experience | skills | certifications")),
    responses(
        (status = 200, description = "Collection as now stored"),
        (status = 409, description = "Content is database-backed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/{collection:projects|education|experience|skills|certifications}/refresh")]
pub async fn refresh_content_collection_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = data.content_admin.as_ref() else {
        return ApiResponse::hosted_mode();
    };
    let Some(collection) = collection(&path) else {
        return ApiResponse::not_found("UNKNOWN_COLLECTION", "Unknown collection");
    };

    match admin.refresh(collection).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => map_admin_error(e),
    }
}
