//! Form configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FormError;
use crate::validation::{DEFAULT_MAX_AGE_YEARS, DEFAULT_MIN_NAME_LENGTH};

/// Which elements make up the form and how strictly they are validated.
///
/// Every key is optional when deserializing; missing keys keep their
/// defaults.
///
/// ```
/// use astroform::FormConfig;
///
/// let config = FormConfig::from_json(r#"{ "debounce_ms": 250 }"#).unwrap();
/// assert_eq!(config.debounce().as_millis(), 250);
/// assert_eq!(config.name_id, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// ID of the name input.
    pub name_id: String,
    /// ID of the date-of-birth input.
    pub dob_id: String,
    /// ID of the form whose submission is guarded.
    pub form_id: String,
    /// Selector of the submit button.
    pub submit_selector: String,
    /// Quiet period before real-time validation runs.
    pub debounce_ms: u64,
    /// Dates of birth older than this are rejected.
    pub max_age_years: u32,
    /// Shortest accepted name, in characters.
    pub min_name_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_id: "name".to_string(),
            dob_id: "dob".to_string(),
            form_id: "predictionForm".to_string(),
            submit_selector: ".submit-btn".to_string(),
            debounce_ms: 500,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn name_id(mut self, id: impl Into<String>) -> Self {
        self.name_id = id.into();
        self
    }

    pub fn dob_id(mut self, id: impl Into<String>) -> Self {
        self.dob_id = id.into();
        self
    }

    pub fn form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    pub fn submit_selector(mut self, selector: impl Into<String>) -> Self {
        self.submit_selector = selector.into();
        self
    }

    pub fn debounce_ms(mut self, millis: u64) -> Self {
        self.debounce_ms = millis;
        self
    }

    pub fn max_age_years(mut self, years: u32) -> Self {
        self.max_age_years = years;
        self
    }

    pub fn min_name_length(mut self, length: usize) -> Self {
        self.min_name_length = length;
        self
    }
}
