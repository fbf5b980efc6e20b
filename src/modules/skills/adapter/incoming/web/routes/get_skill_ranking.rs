use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skills::application::ports::incoming::use_cases::GetSkillRankingError;
use crate::AppState;

/// Cited skills ranked by citation count and grouped by category.
#[utoipa::path(get, path = "/api/skills/ranking", tag = "skills",
    responses(
        (status = 200, description = "Ranked skills and their category grouping"),
        (status = 500, description = "Content backend failure", body = crate::api::schemas::ErrorResponse)
    ))]
#[get("/api/skills/ranking")]
pub async fn get_skill_ranking_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill_ranking.execute().await {
        Ok(ranking) => ApiResponse::success(ranking),
        Err(GetSkillRankingError::QueryFailed(e)) => {
            error!("Content query error ranking skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::content::domain::entities::{Project, Skill};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubContentQuery, StubGetSkillRankingUseCase};

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn get_skill_ranking_over_current_content() {
        let content = StubContentQuery {
            skills: vec![Skill {
                id: "s1".to_string(),
                name: "Python".to_string(),
                category: "Programming".to_string(),
                ..Default::default()
            }],
            projects: vec![
                Project {
                    id: "p1".to_string(),
                    skills_used: vec!["Python".to_string()],
                    ..Default::default()
                },
                Project {
                    id: "p2".to_string(),
                    skills_used: vec!["Python".to_string()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let state = TestAppStateBuilder::default()
            .with_content(content)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_skill_ranking_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/skills/ranking").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["ranked"][0]["name"], "Python");
        assert_eq!(json["data"]["ranked"][0]["citation_count"], 2);
        assert_eq!(json["data"]["ranked"][0]["rank"], 1);
        assert_eq!(
            json["data"]["skills_by_category"][0]["category"],
            "Programming"
        );
    }

    #[actix_web::test]
    async fn get_skill_ranking_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_skill_ranking(StubGetSkillRankingUseCase::failure("db down"))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_skill_ranking_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/skills/ranking").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
