//! Element lookup, done once when the page is ready.

use formdom::Document;
use log::{debug, warn};

use crate::config::FormConfig;
use crate::error::FormError;

/// IDs of the elements the form logic works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub dob: String,
    /// The guarded form, if the page has one.
    pub form: Option<String>,
    /// The submit button, if the page has one.
    pub submit: Option<String>,
}

impl FormFields {
    /// Resolve the elements named by `config` in `doc`.
    ///
    /// The name and date-of-birth inputs are required; a missing form or
    /// submit button only disables the parts that need them.
    pub fn resolve(doc: &Document, config: &FormConfig) -> Result<Self, FormError> {
        let require = |id: &str| {
            doc.get_element_by_id(id)
                .map(|el| el.id.clone())
                .ok_or_else(|| FormError::MissingElement { id: id.to_string() })
        };

        let name = require(&config.name_id)?;
        let dob = require(&config.dob_id)?;

        let form = doc.get_element_by_id(&config.form_id).map(|el| el.id.clone());
        if form.is_none() {
            warn!("Form '#{}' not found; submission will not be validated", config.form_id);
        }

        let submit = doc
            .query_selector(&config.submit_selector)?
            .map(|el| el.id.clone());

        let fields = Self {
            name,
            dob,
            form,
            submit,
        };
        debug!("Resolved form fields: {fields:?}");
        Ok(fields)
    }
}
