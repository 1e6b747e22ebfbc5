// src/generators/strength.rs
use crate::models::{ScoreResult, StrengthLabel};

const COMMON_PASSWORDS: [&str; 5] = ["password", "123456", "qwerty", "admin", "welcome"];

// "890" wraps around; "012" is deliberately absent
const DIGIT_RUNS: [&str; 8] = ["123", "234", "345", "456", "567", "678", "789", "890"];

pub const FEEDBACK_TOO_SHORT: &str = "Password is too short";
pub const FEEDBACK_ADD_UPPERCASE: &str = "Add uppercase letters";
pub const FEEDBACK_ADD_LOWERCASE: &str = "Add lowercase letters";
pub const FEEDBACK_ADD_NUMBERS: &str = "Add numbers";
pub const FEEDBACK_ADD_SYMBOLS: &str = "Add symbols";
pub const FEEDBACK_MORE_TYPES: &str = "Use more types of characters";
pub const FEEDBACK_REPEATED: &str = "Avoid repeated characters";
pub const FEEDBACK_MIX_TYPES: &str = "Mix character types";
pub const FEEDBACK_SEQUENTIAL_LETTERS: &str = "Avoid sequential characters";
pub const FEEDBACK_SEQUENTIAL_NUMBERS: &str = "Avoid sequential numbers";
pub const FEEDBACK_COMMON: &str = "This is a commonly used password";

/// Heuristic strength scoring.
///
/// Rules run in a fixed order and feedback is emitted in that same order:
/// length, character classes, variety, repetition, single class, sequential
/// letters, sequential digits, then the common-password override. The final
/// score is clamped to 0-100.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrengthScorer;

impl StrengthScorer {
    pub fn new() -> Self {
        StrengthScorer
    }

    pub fn score(&self, password: &str) -> ScoreResult {
        let mut score: i32 = 0;
        let mut feedback: Vec<String> = Vec::new();

        let length = password.chars().count();
        if length >= 16 {
            score += 25;
        } else if length >= 12 {
            score += 20;
        } else if length >= 8 {
            score += 10;
        } else {
            score += 5;
            feedback.push(FEEDBACK_TOO_SHORT.to_string());
        }

        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_number = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

        if has_upper {
            score += 10;
        }
        if has_lower {
            score += 10;
        }
        if has_number {
            score += 10;
        }
        if has_symbol {
            score += 15;
        }

        if !has_upper {
            feedback.push(FEEDBACK_ADD_UPPERCASE.to_string());
        }
        if !has_lower {
            feedback.push(FEEDBACK_ADD_LOWERCASE.to_string());
        }
        if !has_number {
            feedback.push(FEEDBACK_ADD_NUMBERS.to_string());
        }
        if !has_symbol {
            feedback.push(FEEDBACK_ADD_SYMBOLS.to_string());
        }

        let variety = [has_upper, has_lower, has_number, has_symbol]
            .iter()
            .filter(|present| **present)
            .count();
        if variety < 3 {
            feedback.push(FEEDBACK_MORE_TYPES.to_string());
        }

        if has_repeated_run(password) {
            score -= 10;
            feedback.push(FEEDBACK_REPEATED.to_string());
        }

        if is_single_class(password) {
            score -= 15;
            feedback.push(FEEDBACK_MIX_TYPES.to_string());
        }

        if has_sequential_letters(password) {
            score -= 10;
            feedback.push(FEEDBACK_SEQUENTIAL_LETTERS.to_string());
        }

        if DIGIT_RUNS.iter().any(|run| password.contains(run)) {
            score -= 10;
            feedback.push(FEEDBACK_SEQUENTIAL_NUMBERS.to_string());
        }

        if is_common_password(password) {
            score = 0;
            feedback = vec![FEEDBACK_COMMON.to_string()];
        }

        let score = score.clamp(0, 100) as u8;
        ScoreResult {
            score,
            strength: StrengthLabel::from_score(score),
            feedback,
        }
    }
}

pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}

// Three or more identical characters in a row. Newlines never count.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] != '\n' && w[0] == w[1] && w[1] == w[2])
}

fn is_single_class(password: &str) -> bool {
    if password.is_empty() {
        return false;
    }
    password.chars().all(|c| c.is_ascii_alphabetic()) || password.chars().all(|c| c.is_ascii_digit())
}

fn has_sequential_letters(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| {
        if !w.iter().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        let a = w[0].to_ascii_lowercase() as u8;
        let b = w[1].to_ascii_lowercase() as u8;
        let c = w[2].to_ascii_lowercase() as u8;
        b == a + 1 && c == b + 1
    })
}
