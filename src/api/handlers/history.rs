// src/api/handlers/history.rs
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;
use crate::core::{PasswordService, ServiceError};
use crate::api::types::{HistoryListResponse, SuccessResponse};
use crate::api::utils::extract_identity;
use log::{debug, info};

fn not_found(e: ServiceError) -> HttpResponse {
    info!("History lookup failed: {}", e);
    HttpResponse::NotFound().json(SuccessResponse::failed(e.to_string()))
}

/// List password history
///
/// Returns the caller's most recent generations, newest first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Password history", body = HistoryListResponse),
        (status = 401, description = "Unauthorized", body = SuccessResponse)
    )
)]
pub async fn list_history(
    service: web::Data<Arc<PasswordService>>,
    req: HttpRequest,
) -> impl Responder {
    let identity = match extract_identity(&req) {
        Ok(identity) => identity,
        Err(e) => {
            return HttpResponse::Unauthorized().json(HistoryListResponse {
                success: false,
                history: vec![],
                error: Some(format!("Authentication error: {}", e)),
            });
        }
    };

    let history = service.list_history(&identity);
    debug!("✅ Returning {} history items for {}", history.len(), identity);

    HttpResponse::Ok().json(HistoryListResponse {
        success: true,
        history,
        error: None,
    })
}

/// Delete a history item
#[utoipa::path(
    delete,
    path = "/history/{index}",
    tag = "History",
    params(
        ("index" = usize, Path, description = "Zero-based position, 0 is the newest")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "History item deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorized", body = SuccessResponse),
        (status = 404, description = "History item not found", body = SuccessResponse)
    )
)]
pub async fn delete_history_item(
    service: web::Data<Arc<PasswordService>>,
    req: HttpRequest,
    path: web::Path<usize>,
) -> impl Responder {
    let identity = match extract_identity(&req) {
        Ok(identity) => identity,
        Err(e) => {
            return HttpResponse::Unauthorized()
                .json(SuccessResponse::failed(format!("Authentication error: {}", e)));
        }
    };

    match service.delete_history_entry(&identity, path.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(SuccessResponse::ok("History item deleted successfully")),
        Err(e) => not_found(e.into()),
    }
}

/// Clear password history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "History",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "History cleared", body = SuccessResponse),
        (status = 401, description = "Unauthorized", body = SuccessResponse),
        (status = 404, description = "No history recorded for this user", body = SuccessResponse)
    )
)]
pub async fn clear_history(
    service: web::Data<Arc<PasswordService>>,
    req: HttpRequest,
) -> impl Responder {
    let identity = match extract_identity(&req) {
        Ok(identity) => identity,
        Err(e) => {
            return HttpResponse::Unauthorized()
                .json(SuccessResponse::failed(format!("Authentication error: {}", e)));
        }
    };

    match service.clear_history(&identity) {
        Ok(_) => HttpResponse::Ok().json(SuccessResponse::ok("Password history cleared successfully")),
        Err(e) => not_found(e.into()),
    }
}
