use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 200, description = "Published posts", body = [crate::blog::domain::entities::BlogPost])
    )
)]
#[get("/api/blog")]
pub async fn get_published_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.get_published_blog_posts().await)
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The published post", body = crate::blog::domain::entities::BlogPost),
        (status = 404, description = "No published post with that slug", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_blog_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get_blog_post_by_slug(&slug).await {
        Some(post) => ApiResponse::success(post),
        None => ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::blog::domain::entities::{BlogStatus, SaveBlogPostInput};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn seeded_state() -> web::Data<AppState> {
        let state = TestAppStateBuilder::default().build();
        for (title, status) in [
            ("Valuation Basics", BlogStatus::Published),
            ("Unfinished Thoughts", BlogStatus::Draft),
        ] {
            state
                .blog
                .save_blog_post(SaveBlogPostInput {
                    title: title.to_string(),
                    status: Some(status),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        state
    }

    #[actix_web::test]
    async fn list_returns_only_published() {
        let app = test::init_service(
            App::new()
                .app_data(seeded_state().await)
                .service(get_published_blog_posts_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blog").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let posts = body["data"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["slug"], "valuation-basics");
        assert_eq!(posts[0]["status"], "published");
    }

    #[actix_web::test]
    async fn slug_lookup_hides_drafts() {
        let app = test::init_service(
            App::new()
                .app_data(seeded_state().await)
                .service(get_blog_post_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/blog/valuation-basics")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/blog/unfinished-thoughts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BLOG_POST_NOT_FOUND");
    }
}
