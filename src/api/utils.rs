// src/api/utils.rs

use actix_web::{HttpRequest, HttpMessage};
use actix_web::web;
use crate::core::auth::{AuthError, TokenVerifier};
use crate::models::Identity;
use log::{debug, warn};

/// Resolve the caller's identity for a request.
///
/// The `TokenValidator` middleware normally stores it in the request
/// extensions; otherwise the Authorization header is validated here.
pub fn extract_identity(req: &HttpRequest) -> Result<Identity, AuthError> {
    if let Some(identity) = req.extensions().get::<Identity>() {
        return Ok(identity.clone());
    }
    debug!("⚠️ Identity not found in extensions, trying header extraction");

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    let verifier = req.app_data::<web::Data<TokenVerifier>>().ok_or_else(|| {
        warn!("❌ No token verifier registered");
        AuthError::NotConfigured
    })?;

    verifier.validate_header(header)
}
