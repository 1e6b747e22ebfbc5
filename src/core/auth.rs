// src/core/auth.rs
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::models::Identity;

// JWT claims issued by the upstream identity service
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    // Subject (user key)
    pub sub: String,
    // Issued at
    #[serde(default)]
    pub iat: i64,
    // Expiration time
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingHeader,

    #[error("Invalid authorization header format")]
    InvalidHeader,

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Token has no subject")]
    MissingSubject,

    #[error("Token verification is not configured")]
    NotConfigured,
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Verifies bearer tokens and resolves them to an identity.
///
/// Tokens are HS256 JWTs signed with a shared secret by whichever service
/// handles login; this side only checks signature and expiry.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Identity> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        let subject = token_data.claims.sub;
        if subject.trim().is_empty() {
            return Err(AuthError::MissingSubject);
        }
        Ok(Identity::new(subject))
    }

    /// Pull the token out of an `Authorization: Bearer ...` header value and validate it.
    pub fn validate_header(&self, header: Option<&str>) -> Result<Identity> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let token = header.strip_prefix("Bearer ").ok_or(AuthError::InvalidHeader)?;
        self.validate_token(token.trim())
    }
}
