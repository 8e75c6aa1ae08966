//! Field validators for the prediction form.
//!
//! Each validator maps the raw text of one input to `Ok(())` or an error
//! whose `Display` is the message shown to the user.
//!
//! # Example
//!
//! ```
//! use astroform::validation::{validate_date, validate_name};
//!
//! assert!(validate_name("Mary-Jane O'Brien").is_ok());
//! assert!(validate_date("15/05/1990").is_ok());
//!
//! let err = validate_name("J").unwrap_err();
//! assert_eq!(err.to_string(), "Name must be at least 2 characters long");
//! ```

mod date;
mod name;
mod result;

pub use date::{
    DEFAULT_MAX_AGE_YEARS, DateError, DateRules, parse_birth_date, parse_birth_date_on,
    validate_date, validate_date_on,
};
pub use name::{DEFAULT_MIN_NAME_LENGTH, NameError, NameRules, validate_name};
pub use result::{FieldError, ValidationResult};
