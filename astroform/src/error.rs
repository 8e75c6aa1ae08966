use formdom::DomError;
use thiserror::Error;

/// Errors raised while wiring the form up, never by validation itself.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Required element '#{id}' not found")]
    MissingElement { id: String },

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
