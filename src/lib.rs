//! SecureGen: password generation, strength scoring, and a bounded
//! per-user history of generated passwords.
//!
//! [`core::PasswordService`] is the entry point; the `api` module puts an
//! actix-web front end on it and `cli` a local command line.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod history;
pub mod models;
pub mod utils;

pub use crate::core::{PasswordService, ServiceError};
