// src/core/mod.rs
pub mod auth;
pub mod config;
pub mod service;

pub use service::{PasswordService, ServiceError};
