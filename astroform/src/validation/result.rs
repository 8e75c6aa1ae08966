/// Information about the field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (`"name"`, `"dob"`).
    pub field_name: String,
    /// ID of the input element the error is shown next to.
    pub element_id: String,
    /// Error message.
    pub message: String,
}

/// Result of validating the whole form.
///
/// Validation stops at the first failing field, so at most one error is
/// ever reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// A field failed validation.
    Invalid(FieldError),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the validation error (if any).
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// The user-facing message, empty when valid.
    pub fn message(&self) -> &str {
        self.error().map_or("", |e| e.message.as_str())
    }

    /// Get the element ID of the invalid field (for focusing).
    pub fn invalid_element(&self) -> Option<&str> {
        self.error().map(|e| e.element_id.as_str())
    }
}
