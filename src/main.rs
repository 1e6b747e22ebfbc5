use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use securegen::api;
use securegen::cli::{handlers, Args, CliCommand};
use securegen::core::auth::TokenVerifier;
use securegen::core::config::Config;
use securegen::utils::generate_secret;
use securegen::PasswordService;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config)?;
    log::debug!(
        "Loaded config: {}:{}, log level {}",
        config.web_address, config.web_port, config.log_level
    );

    let service = Arc::new(PasswordService::new());

    match args.command.unwrap_or(CliCommand::Serve { port: None, address: None }) {
        CliCommand::Generate(generate) => {
            handlers::handle_generate(&service, &generate, config.default_password_length)?;
        }
        CliCommand::Analyze { password } => {
            handlers::handle_analyze(&service, password)?;
        }
        CliCommand::Serve { port, address } => {
            let secret = match &config.jwt_secret {
                Some(secret) => secret.clone(),
                None => {
                    log::warn!("JWT_SECRET is not set; using a random secret, so no externally issued token will verify");
                    generate_secret()
                }
            };

            let port = port.unwrap_or(config.web_port);
            let address = address.unwrap_or_else(|| config.web_address.clone());

            log::info!("🔒 Starting SecureGen");
            println!("🚀 API server listening on http://{}:{}", address, port);

            api::start_server(service, TokenVerifier::new(&secret), &address, port)
                .await
                .context("API server failed")?;

            log::info!("✅ SecureGen shutdown complete.");
        }
    }

    Ok(())
}
