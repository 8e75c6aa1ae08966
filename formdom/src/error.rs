use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Element '{id}' not found")]
    ElementNotFound { id: String },

    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("The document root cannot be {0}")]
    RootMutation(&'static str),
}
