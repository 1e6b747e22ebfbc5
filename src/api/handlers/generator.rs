// src/api/handlers/generator.rs

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;
use crate::core::PasswordService;
use crate::models::GenerationRequest;
use crate::api::types::{
    PasswordGenerationResponse, PasswordAnalysisRequest, PasswordAnalysisResponse,
    SuccessResponse,
};
use crate::api::utils::extract_identity;
use log::{debug, warn};

/// Generate a secure password
///
/// Generates a password from the requested character pool, scores it, and
/// records it in the caller's history (newest first, 10 entries kept).
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    security(
        ("bearer_auth" = [])
    ),
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid generation settings", body = PasswordGenerationResponse),
        (status = 401, description = "Unauthorized", body = SuccessResponse)
    )
)]
pub async fn generate_password(
    service: web::Data<Arc<PasswordService>>,
    req: HttpRequest,
    generation_req: web::Json<GenerationRequest>,
) -> impl Responder {
    let identity = match extract_identity(&req) {
        Ok(identity) => identity,
        Err(e) => {
            return HttpResponse::Unauthorized()
                .json(PasswordGenerationResponse::failed(format!("Authentication error: {}", e)));
        }
    };

    let request = generation_req.into_inner();
    debug!("🔧 generate_password called by {} (length {})", identity, request.length);

    match service.generate(&identity, &request) {
        Ok(generated) => HttpResponse::Ok().json(PasswordGenerationResponse {
            success: true,
            password: Some(generated.password),
            strength: Some(generated.strength),
            score: Some(generated.score),
            feedback: generated.feedback,
            error: None,
        }),
        Err(e) => {
            warn!("Rejected generation request from {}: {}", identity, e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse::failed(e.to_string()))
        }
    }
}

/// Analyze password strength
///
/// Scores an arbitrary password. Nothing is recorded.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Generator",
    security(
        ("bearer_auth" = [])
    ),
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse),
        (status = 401, description = "Unauthorized", body = SuccessResponse)
    )
)]
pub async fn analyze_password(
    service: web::Data<Arc<PasswordService>>,
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> impl Responder {
    let result = service.analyze(&analysis_req.password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        score: result.score,
        strength: result.strength,
        feedback: result.feedback,
        error: None,
    })
}
