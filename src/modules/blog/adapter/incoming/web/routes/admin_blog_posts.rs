use actix_web::{delete, get, post, web, Responder};
use tracing::error;

use super::map_blog_store_error;
use crate::blog::domain::entities::SaveBlogPostInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/blog",
    tag = "admin",
    responses(
        (status = 200, description = "Every post, drafts included", body = [crate::blog::domain::entities::BlogPost])
    )
)]
#[get("/api/admin/blog")]
pub async fn get_admin_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.get_blog_posts().await)
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/{post_id}",
    tag = "admin",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = crate::blog::domain::entities::BlogPost),
        (status = 404, description = "No post with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/admin/blog/{post_id}")]
pub async fn get_admin_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get_blog_post_by_id(&post_id).await {
        Some(post) => ApiResponse::success(post),
        None => ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found"),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/blog",
    tag = "admin",
    request_body = SaveBlogPostInput,
    responses(
        (status = 200, description = "Saved post", body = crate::blog::domain::entities::BlogPost),
        (status = 400, description = "Invalid post", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/blog")]
pub async fn save_blog_post_handler(
    payload: web::Json<SaveBlogPostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.save_blog_post(payload.into_inner()).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => map_blog_store_error("save_blog_post", e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/{post_id}",
    tag = "admin",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No post with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/admin/blog/{post_id}")]
pub async fn delete_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.delete_blog_post(&post_id).await {
        Ok(true) => ApiResponse::no_content(),
        Ok(false) => ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found"),
        Err(e) => {
            error!(error = %e, post_id = %post_id, "Failed to delete blog post");
            ApiResponse::internal_error()
        }
    }
}
