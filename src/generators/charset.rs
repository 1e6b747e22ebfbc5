// src/generators/charset.rs
use std::fmt;
use thiserror::Error;
use crate::models::{GenerationRequest, SymbolGroupSelection};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 100;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
// Every printable ASCII punctuation character
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const GROUP_PUNCTUATION: &str = ".,;:";
const GROUP_BRACKETS: &str = "[]{}()<>";
const GROUP_MATH: &str = "+-=_*";
const GROUP_SPECIAL: &str = "!@#$%^&";
const GROUP_OTHER: &str = "~`|\\/?\"'";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("At least one character set must be selected")]
    NoCharsetSelected,

    #[error("No characters available with the selected symbol groups")]
    EmptyPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// One enabled category and its literal characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    pub class: CharacterClass,
    pub chars: String,
}

/// The concrete sampling pool for one request.
///
/// `sets` lists the enabled categories in request order (uppercase, lowercase,
/// numbers, symbols); `chars` is their concatenation and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    sets: Vec<CharacterSet>,
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn sets(&self) -> &[CharacterSet] {
        &self.sets
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterPoolBuilder;

impl CharacterPoolBuilder {
    pub fn new() -> Self {
        CharacterPoolBuilder
    }

    /// Rejects lengths outside `MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH`.
    pub fn validate_length(&self, length: usize) -> Result<(), ValidationError> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(ValidationError::LengthOutOfRange {
                length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }

    pub fn build(&self, request: &GenerationRequest) -> Result<CharacterPool, ValidationError> {
        if !request.uppercase && !request.lowercase && !request.numbers && !request.symbols {
            return Err(ValidationError::NoCharsetSelected);
        }

        let mut sets = Vec::with_capacity(4);
        if request.uppercase {
            sets.push(CharacterSet { class: CharacterClass::Uppercase, chars: UPPERCASE.to_string() });
        }
        if request.lowercase {
            sets.push(CharacterSet { class: CharacterClass::Lowercase, chars: LOWERCASE.to_string() });
        }
        if request.numbers {
            sets.push(CharacterSet { class: CharacterClass::Numbers, chars: DIGITS.to_string() });
        }
        if request.symbols {
            let symbols = symbol_chars(request.symbol_groups.as_ref());
            if !symbols.is_empty() {
                sets.push(CharacterSet { class: CharacterClass::Symbols, chars: symbols });
            }
        }

        let chars: Vec<char> = sets.iter().flat_map(|set| set.chars.chars()).collect();
        if chars.is_empty() {
            return Err(ValidationError::EmptyPool);
        }

        Ok(CharacterPool { sets, chars })
    }
}

fn symbol_chars(groups: Option<&SymbolGroupSelection>) -> String {
    let Some(groups) = groups else {
        return ASCII_PUNCTUATION.to_string();
    };

    let mut symbols = String::new();
    for (enabled, literal) in [
        (groups.punctuation, GROUP_PUNCTUATION),
        (groups.brackets, GROUP_BRACKETS),
        (groups.math, GROUP_MATH),
        (groups.special, GROUP_SPECIAL),
        (groups.other, GROUP_OTHER),
    ] {
        if !enabled {
            continue;
        }
        for c in literal.chars() {
            if !symbols.contains(c) {
                symbols.push(c);
            }
        }
    }
    symbols
}
