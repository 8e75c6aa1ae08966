//! Name validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_MIN_NAME_LENGTH: usize = 2;

/// ASCII letters, spaces, hyphens, apostrophes and periods.
static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z \-'.]+$").expect("Invalid name pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Please enter your name")]
    Empty,

    #[error("Name must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Name can only contain letters, spaces, hyphens, apostrophes, and periods")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    /// Minimum length of the trimmed name, in characters.
    pub min_length: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

impl NameRules {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn validate(&self, input: &str) -> Result<(), NameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        if name.chars().count() < self.min_length {
            return Err(NameError::TooShort {
                min: self.min_length,
            });
        }

        if !NAME_CHARS.is_match(name) {
            return Err(NameError::InvalidCharacters);
        }

        Ok(())
    }
}

pub fn validate_name(input: &str) -> Result<(), NameError> {
    NameRules::default().validate(input)
}
