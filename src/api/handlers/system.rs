// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use crate::api::types::HealthResponse;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}
