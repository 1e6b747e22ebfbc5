// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use std::fmt;
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

/// Opaque caller reference under which history is scoped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Identity(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Identity::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Identity(value)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which symbol sub-pools contribute when symbols are requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymbolGroupSelection {
    /// `. , ; :`
    #[serde(default = "default_true")]
    pub punctuation: bool,
    /// `[ ] { } ( ) < >`
    #[serde(default = "default_true")]
    pub brackets: bool,
    /// `+ - = _ *`
    #[serde(default = "default_true")]
    pub math: bool,
    /// `! @ # $ % ^ &`
    #[serde(default = "default_true")]
    pub special: bool,
    /// `` ~ ` | \ / ? " ' ``
    #[serde(default = "default_true")]
    pub other: bool,
}

impl Default for SymbolGroupSelection {
    fn default() -> Self {
        Self {
            punctuation: true,
            brackets: true,
            math: true,
            special: true,
            other: true,
        }
    }
}

impl SymbolGroupSelection {
    pub fn none() -> Self {
        Self {
            punctuation: false,
            brackets: false,
            math: false,
            special: false,
            other: false,
        }
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Password length (4-100)
    pub length: usize,
    /// Include uppercase letters
    #[serde(default = "default_true")]
    pub uppercase: bool,
    /// Include lowercase letters
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Include numbers
    #[serde(default = "default_true")]
    pub numbers: bool,
    /// Include symbols
    #[serde(default = "default_true")]
    pub symbols: bool,
    /// Restrict symbols to specific groups (all ASCII punctuation when absent)
    #[serde(default)]
    pub symbol_groups: Option<SymbolGroupSelection>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            symbol_groups: None,
        }
    }
}

impl GenerationRequest {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

/// Categorical strength bucket derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthLabel::VeryStrong,
            60..=79 => StrengthLabel::Strong,
            40..=59 => StrengthLabel::Medium,
            20..=39 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// Score in 0-100
    pub score: u8,
    pub strength: StrengthLabel,
    /// Diagnostics in rule evaluation order
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthLabel,
    pub score: u8,
    pub feedback: Vec<String>,
}

/// One past generation, as stored in an identity's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub password: String,
    pub strength: StrengthLabel,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
    /// The request that produced this password
    pub settings: GenerationRequest,
}
