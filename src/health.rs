use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;

use crate::local_store::application::ports::outgoing::KeyValueStore;
use crate::AppState;

const READINESS_KEY: &str = "portfolio_readiness_probe";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_mode: &'static str,
    store: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reads from the key/value store
/// - Pings the database in hosted mode
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_status = match data.store.backend().get_item(READINESS_KEY).await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let database_status = match &data.database {
        Some(db) => Some(
            match db
                .execute(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1",
                ))
                .await
            {
                Ok(_) => "ok",
                Err(_) => "unhealthy",
            },
        ),
        None => None,
    };

    let healthy = store_status == "ok" && database_status.unwrap_or("ok") == "ok";
    let body = ReadinessResponse {
        status: if healthy { "ok" } else { "unhealthy" },
        content_mode: data.content_mode.as_str(),
        store: store_status,
        database: database_status,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
