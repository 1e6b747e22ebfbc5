// src/api/middleware/mod.rs
pub mod auth;

pub use auth::TokenValidator;
