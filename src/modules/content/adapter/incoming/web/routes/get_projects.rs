use actix_web::{get, web, Responder};

use super::map_content_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "All projects, possibly empty"),
        (status = 500, description = "Content backend failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_projects().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => map_content_error("projects", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "content",
    params(("project_id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project"),
        (status = 404, description = "No project with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.content.get_project(&project_id).await {
        Ok(Some(project)) => ApiResponse::success(project),
        Ok(None) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        Err(e) => map_content_error("project", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::content::domain::entities::Project;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubContentQuery;

    fn project(id: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn state_with_projects() -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_content(StubContentQuery {
                projects: vec![project("p1", "DCF"), project("p2", "LBO")],
                ..Default::default()
            })
            .build()
    }

    #[actix_web::test]
    async fn get_projects_returns_all() {
        let app = test::init_service(
            App::new()
                .app_data(state_with_projects())
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn get_projects_empty_is_ok() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn get_project_by_id_found() {
        let app = test::init_service(
            App::new()
                .app_data(state_with_projects())
                .service(get_project_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/p2").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["title"], "LBO");
    }

    #[actix_web::test]
    async fn get_project_by_id_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(state_with_projects())
                .service(get_project_by_id_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/p9").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
