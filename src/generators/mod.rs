// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod strength;

pub use charset::{CharacterClass, CharacterPool, CharacterPoolBuilder, CharacterSet, ValidationError};
pub use password::PasswordGenerator;
pub use strength::StrengthScorer;
