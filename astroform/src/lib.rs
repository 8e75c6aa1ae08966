pub mod config;
pub mod debounce;
pub mod display;
pub mod error;
pub mod fields;
pub mod form;
pub mod page;
pub mod validation;

pub use config::FormConfig;
pub use debounce::Debouncer;
pub use error::FormError;
pub use fields::FormFields;
pub use form::{
    EventOutcome, FieldKind, FieldState, FormController, FormRules, validate_form, validate_form_on,
};

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::display::{clear_errors, show_error};
    pub use crate::error::FormError;
    pub use crate::fields::FormFields;
    pub use crate::form::{EventOutcome, FieldKind, FieldState, FormController, FormRules};
    pub use crate::validation::{
        DateError, DateRules, FieldError, NameError, NameRules, ValidationResult, parse_birth_date,
        validate_date, validate_name,
    };
}
