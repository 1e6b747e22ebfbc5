// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use crate::generators::charset::CharacterPool;

/// Draws passwords uniformly from a character pool.
///
/// The default source is `OsRng`, which reads the operating system CSPRNG and
/// is safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, pool: &CharacterPool, length: usize) -> String {
        self.generate_with(pool, length, &mut OsRng)
    }

    /// Same as `generate`, with a caller-supplied cryptographic source.
    pub fn generate_with<R>(&self, pool: &CharacterPool, length: usize, rng: &mut R) -> String
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let chars = pool.chars();
        if chars.is_empty() {
            return String::new();
        }

        let dist = Uniform::from(0..chars.len());
        (0..length).map(|_| chars[dist.sample(rng)]).collect()
    }
}
