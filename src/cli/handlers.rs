// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::{style, StyledObject};
use inquire::Password;
use crate::cli::commands::GenerateArgs;
use crate::core::PasswordService;
use crate::models::{ScoreResult, StrengthLabel};

fn styled_label(label: StrengthLabel) -> StyledObject<&'static str> {
    let text = style(label.as_str()).bold();
    match label {
        StrengthLabel::VeryWeak => text.red(),
        StrengthLabel::Weak => text.color256(208),
        StrengthLabel::Medium => text.yellow(),
        StrengthLabel::Strong => text.green(),
        StrengthLabel::VeryStrong => text.cyan(),
    }
}

fn print_score(score: u8, strength: StrengthLabel, feedback: &[String]) {
    println!("💪 Strength: {} ({}/100)", styled_label(strength), score);
    for item in feedback {
        println!("   • {}", style(item).dim());
    }
}

pub fn handle_generate(service: &PasswordService, args: &GenerateArgs, default_length: usize) -> Result<()> {
    let request = args.to_request(default_length);
    let generated = service
        .preview(&request)
        .context("Could not generate a password with these settings")?;

    println!("🔑 {}", style(&generated.password).bold());
    print_score(generated.score, generated.strength, &generated.feedback);
    Ok(())
}

pub fn handle_analyze(service: &PasswordService, password: Option<String>) -> Result<ScoreResult> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    let result = service.analyze(&password);
    print_score(result.score, result.strength, &result.feedback);
    Ok(result)
}
