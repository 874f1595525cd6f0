use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::content_store::{queries, QueryParams, SanityClient};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_store: &'static str,
    dataset: String,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Runs a trivial query against the content store
#[get("/ready")]
pub async fn readiness(store: web::Data<SanityClient>) -> impl Responder {
    let dataset = store.config().dataset.clone();

    match store.fetch_value(queries::PING, &QueryParams::none()).await {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: "ok",
            dataset,
        }),
        Err(e) => {
            tracing::warn!(dataset = %dataset, "Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                content_store: "unhealthy",
                dataset,
            })
        }
    }
}
