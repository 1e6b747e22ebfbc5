// src/utils/format.rs
use base64::{engine::general_purpose, Engine as _};
use rand::{rngs::OsRng, RngCore};

// Truncate a secret for log output
pub fn preview(secret: &str) -> String {
    let head: String = secret.chars().take(10).collect();
    if head.len() < secret.len() {
        format!("{}...", head)
    } else {
        head
    }
}

// Generate a random signing secret
pub fn generate_secret() -> String {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);

    general_purpose::STANDARD.encode(secret)
}
