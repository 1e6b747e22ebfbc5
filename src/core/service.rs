// src/core/service.rs
use chrono::Utc;
use log::{debug, info};
use thiserror::Error;
use crate::generators::{CharacterPoolBuilder, PasswordGenerator, StrengthScorer, ValidationError};
use crate::history::{HistoryError, HistoryStore};
use crate::models::{GeneratedPassword, GenerationRequest, HistoryEntry, Identity, ScoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] HistoryError),
}

/// Owns the generation pipeline and every identity's history.
///
/// Constructed once at startup and shared (behind an `Arc`) with whatever front
/// end calls it; identities are assumed to be verified already.
#[derive(Debug, Default)]
pub struct PasswordService {
    pool_builder: CharacterPoolBuilder,
    generator: PasswordGenerator,
    scorer: StrengthScorer,
    history: HistoryStore,
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and score a password without touching any history.
    pub fn preview(&self, request: &GenerationRequest) -> Result<GeneratedPassword, ValidationError> {
        self.pool_builder.validate_length(request.length)?;
        let pool = self.pool_builder.build(request)?;
        debug!("Generating {} characters from a pool of {}", request.length, pool.len());

        let password = self.generator.generate(&pool, request.length);
        let result = self.scorer.score(&password);

        Ok(GeneratedPassword {
            password,
            strength: result.strength,
            score: result.score,
            feedback: result.feedback,
        })
    }

    pub fn generate(&self, identity: &Identity, request: &GenerationRequest) -> Result<GeneratedPassword, ValidationError> {
        let generated = self.preview(request)?;

        self.history.record(identity, HistoryEntry {
            password: generated.password.clone(),
            strength: generated.strength,
            score: generated.score,
            timestamp: Utc::now(),
            settings: request.clone(),
        });
        info!("Generated {} password for {}", generated.strength, identity);

        Ok(generated)
    }

    pub fn analyze(&self, password: &str) -> ScoreResult {
        self.scorer.score(password)
    }

    pub fn list_history(&self, identity: &Identity) -> Vec<HistoryEntry> {
        self.history.list(identity)
    }

    pub fn delete_history_entry(&self, identity: &Identity, index: usize) -> Result<HistoryEntry, HistoryError> {
        let removed = self.history.delete_at(identity, index)?;
        info!("Deleted history item {} for {}", index, identity);
        Ok(removed)
    }

    pub fn clear_history(&self, identity: &Identity) -> Result<usize, HistoryError> {
        let removed = self.history.clear(identity)?;
        info!("Cleared {} history items for {}", removed, identity);
        Ok(removed)
    }
}
