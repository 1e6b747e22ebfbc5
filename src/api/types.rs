// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::models::{HistoryEntry, StrengthLabel};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

impl SuccessResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the server is accepting requests
    pub status: String,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Strength label of the generated password
    pub strength: Option<StrengthLabel>,
    /// Strength score (0-100)
    pub score: Option<u8>,
    /// Scoring feedback, in rule order
    pub feedback: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            score: None,
            feedback: vec![],
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to score
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength score (0-100)
    pub score: u8,
    /// Strength label
    pub strength: StrengthLabel,
    /// Scoring feedback, in rule order
    pub feedback: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// History types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Past generations, newest first
    pub history: Vec<HistoryEntry>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}
