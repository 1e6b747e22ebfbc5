// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use crate::generators::charset::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Runtime configuration, read from the environment over built-in defaults
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Token verification (None means a throwaway secret is generated at startup)
    pub jwt_secret: Option<String>,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 8000,

            jwt_secret: None,

            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `load` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid WEB_PORT '{}', using {}", val, config.web_port),
            }
        }

        if let Some(secret) = lookup("JWT_SECRET") {
            if !secret.trim().is_empty() {
                config.jwt_secret = Some(secret);
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => log::warn!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val,
                    config.default_password_length
                ),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}
