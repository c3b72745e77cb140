use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    deployment: &'static str,
    data_origin: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reports how the site was resolved at startup
/// - Always ready once serving: the bundled dataset covers API outages
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        deployment: data.deployment_mode.as_str(),
        data_origin: data.portfolio.origin.label(),
    })
}
