//! Unit tests for the strength scorer.
//!
//! Covers the rule pipeline (score deltas and feedback order), the
//! common-password override, and the label thresholds.

use rstest::rstest;
use securegen::generators::StrengthScorer;
use securegen::models::StrengthLabel;

const COMMON: &str = "This is a commonly used password";

fn score(password: &str) -> (u8, StrengthLabel, Vec<String>) {
    let result = StrengthScorer::new().score(password);
    (result.score, result.strength, result.feedback)
}

// ---------------------------------------------------------------------------
// Label thresholds
// ---------------------------------------------------------------------------

#[rstest]
#[case(0, StrengthLabel::VeryWeak)]
#[case(19, StrengthLabel::VeryWeak)]
#[case(20, StrengthLabel::Weak)]
#[case(39, StrengthLabel::Weak)]
#[case(40, StrengthLabel::Medium)]
#[case(59, StrengthLabel::Medium)]
#[case(60, StrengthLabel::Strong)]
#[case(79, StrengthLabel::Strong)]
#[case(80, StrengthLabel::VeryStrong)]
#[case(100, StrengthLabel::VeryStrong)]
fn test_label_thresholds(#[case] score: u8, #[case] expected: StrengthLabel) {
    assert_eq!(StrengthLabel::from_score(score), expected, "label for score={score}");
}

// ---------------------------------------------------------------------------
// Common-password override
// ---------------------------------------------------------------------------

#[rstest]
#[case("password")]
#[case("Password")]
#[case("PASSWORD")]
#[case("123456")]
#[case("qwerty")]
#[case("QwErTy")]
#[case("admin")]
#[case("Welcome")]
fn test_common_passwords_score_zero(#[case] password: &str) {
    let (score, strength, feedback) = score(password);
    assert_eq!(score, 0);
    assert_eq!(strength, StrengthLabel::VeryWeak);
    assert_eq!(feedback, vec![COMMON]);
}

#[test]
fn test_denylist_needs_exact_match() {
    let (_, _, feedback) = score("password1");
    assert!(!feedback.contains(&COMMON.to_string()));
}

// ---------------------------------------------------------------------------
// Rule pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_short_sequential_letters() {
    let (score, strength, feedback) = score("abc");
    assert_eq!(score, 0);
    assert_eq!(strength, StrengthLabel::VeryWeak);
    assert_eq!(
        feedback,
        vec![
            "Password is too short",
            "Add uppercase letters",
            "Add numbers",
            "Add symbols",
            "Use more types of characters",
            "Mix character types",
            "Avoid sequential characters",
        ]
    );
}

#[test]
fn test_repeated_single_class() {
    let (score, _, feedback) = score("aaaaaaaa");
    assert_eq!(score, 0);
    assert_eq!(
        feedback,
        vec![
            "Add uppercase letters",
            "Add numbers",
            "Add symbols",
            "Use more types of characters",
            "Avoid repeated characters",
            "Mix character types",
        ]
    );
}

#[test]
fn test_digits_only_with_run() {
    let (score, _, feedback) = score("1234567890");
    assert_eq!(score, 0);
    assert_eq!(
        feedback,
        vec![
            "Add uppercase letters",
            "Add lowercase letters",
            "Add symbols",
            "Use more types of characters",
            "Mix character types",
            "Avoid sequential numbers",
        ]
    );
}

#[test]
fn test_sequence_penalty_without_symbols() {
    // 10 (length) + 30 (upper, lower, digit) - 10 (abc)
    let (score, strength, feedback) = score("Abcdef12");
    assert_eq!(score, 30);
    assert_eq!(strength, StrengthLabel::Weak);
    assert_eq!(feedback, vec!["Add symbols", "Avoid sequential characters"]);
}

#[test]
fn test_medium_phrase() {
    // 20 (length) + 10 + 10 + 15 (space and '!')
    let (score, strength, feedback) = score("Hello World!");
    assert_eq!(score, 55);
    assert_eq!(strength, StrengthLabel::Medium);
    assert_eq!(feedback, vec!["Add numbers"]);
}

#[test]
fn test_all_classes_long_password() {
    let (score, strength, feedback) = score("Tr0ub4dor&3xQz!9");
    assert_eq!(score, 70);
    assert_eq!(strength, StrengthLabel::Strong);
    assert!(feedback.is_empty());
}

#[test]
fn test_maximal_length_password() {
    let password = "aB3$".repeat(25);
    let (score, strength, feedback) = score(&password);
    assert_eq!(score, 70);
    assert_eq!(strength, StrengthLabel::Strong);
    assert!(feedback.is_empty());
}

#[test]
fn test_empty_password_is_bounded() {
    let (score, strength, _) = score("");
    assert_eq!(score, 5);
    assert_eq!(strength, StrengthLabel::VeryWeak);
}

#[test]
fn test_non_ascii_counts_as_symbol() {
    // 10 (length) + 10 (lower) + 15 (é)
    let (score, _, feedback) = score("éclairzq");
    assert_eq!(score, 35);
    assert_eq!(feedback, vec!["Add uppercase letters", "Add numbers", "Use more types of characters"]);
}
