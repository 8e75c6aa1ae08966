//! Form wiring: submit-time validation and debounced real-time feedback.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//!
//! use astroform::{EventOutcome, FormConfig, FormController, page};
//! use formdom::Event;
//!
//! # async fn run() -> Result<(), astroform::FormError> {
//! let document = Arc::new(Mutex::new(page::prediction_page()));
//! let mut form = FormController::attach(document, &FormConfig::default())?;
//!
//! form.handle_event(&Event::input("name", "Ada Lovelace"));
//! form.handle_event(&Event::input("dob", "10-12-1815"));
//!
//! // The date is older than 120 years, so submission is blocked.
//! let outcome = form.handle_event(&Event::submit("predictionForm"));
//! assert_eq!(outcome, EventOutcome::Prevented);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use formdom::{Document, Event};
use log::{debug, trace, warn};

use crate::config::FormConfig;
use crate::debounce::Debouncer;
use crate::display::{clear_errors, show_error};
use crate::error::FormError;
use crate::fields::FormFields;
use crate::validation::{DateRules, FieldError, NameRules, ValidationResult};

/// The two validated inputs, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    DateOfBirth,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Name, FieldKind::DateOfBirth];

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dob",
        }
    }
}

impl FormFields {
    pub fn element_id(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::DateOfBirth => &self.dob,
        }
    }

    pub fn kind_of(&self, element_id: &str) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|&kind| self.element_id(kind) == element_id)
    }
}

/// What is currently rendered for a field.
///
/// `Valid` and `Untouched` look the same on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    /// An error node with this message is displayed.
    Invalid(String),
}

/// Whether the default action of an event should go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Prevented,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormRules {
    pub name: NameRules,
    pub date: DateRules,
}

impl FormRules {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            name: NameRules::new(config.min_name_length),
            date: DateRules::new(config.max_age_years),
        }
    }

    /// Validate one field value, mapping failures to their message.
    pub fn check(&self, kind: FieldKind, value: &str, today: NaiveDate) -> Result<(), String> {
        match kind {
            FieldKind::Name => self.name.validate(value).map_err(|e| e.to_string()),
            FieldKind::DateOfBirth => self.date.validate(value, today).map_err(|e| e.to_string()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clear all errors, then validate name and date of birth in that order.
///
/// The first failure is displayed and returned; later fields are not
/// checked.
pub fn validate_form(doc: &mut Document, fields: &FormFields, rules: &FormRules) -> ValidationResult {
    validate_form_on(doc, fields, rules, today())
}

/// [`validate_form`] with an explicit calendar date.
pub fn validate_form_on(
    doc: &mut Document,
    fields: &FormFields,
    rules: &FormRules,
    today: NaiveDate,
) -> ValidationResult {
    clear_errors(doc);

    for kind in FieldKind::ALL {
        let id = fields.element_id(kind);
        let value = doc.value(id).unwrap_or_default().to_string();

        if let Err(message) = rules.check(kind, &value, today) {
            if let Err(e) = show_error(doc, id, &message) {
                warn!("Could not display error for #{id}: {e}");
            }
            return ValidationResult::Invalid(FieldError {
                field_name: kind.field_name().to_string(),
                element_id: id.to_string(),
                message,
            });
        }
    }

    ValidationResult::Valid
}

/// State shared between the controller and its debounced listeners.
struct Shared {
    document: Arc<Mutex<Document>>,
    fields: FormFields,
    rules: FormRules,
    states: Mutex<HashMap<FieldKind, FieldState>>,
}

impl Shared {
    /// Error nodes are gone after a clear, so no field stays `Invalid`.
    fn forget_invalid(states: &mut HashMap<FieldKind, FieldState>) {
        for state in states.values_mut() {
            if matches!(state, FieldState::Invalid(_)) {
                *state = FieldState::Untouched;
            }
        }
    }

    /// Debounced handler body: re-check a single field.
    fn revalidate(&self, kind: FieldKind, value: &str) {
        let mut doc = lock(&self.document);
        clear_errors(&mut doc);

        let state = match self.rules.check(kind, value, today()) {
            Ok(()) => FieldState::Valid,
            // Nothing typed yet: stay quiet.
            Err(_) if value.trim().is_empty() => FieldState::Untouched,
            Err(message) => {
                let id = self.fields.element_id(kind);
                if let Err(e) = show_error(&mut doc, id, &message) {
                    warn!("Could not display error for #{id}: {e}");
                }
                FieldState::Invalid(message)
            }
        };
        trace!("Real-time check of {}: {state:?}", kind.field_name());

        let mut states = lock(&self.states);
        Self::forget_invalid(&mut states);
        states.insert(kind, state);
    }

    fn validate(&self) -> ValidationResult {
        let mut doc = lock(&self.document);
        let result = validate_form(&mut doc, &self.fields, &self.rules);

        let mut states = lock(&self.states);
        Self::forget_invalid(&mut states);
        for kind in FieldKind::ALL {
            match result.error() {
                Some(error) if error.field_name == kind.field_name() => {
                    states.insert(kind, FieldState::Invalid(error.message.clone()));
                    break;
                }
                _ => {
                    states.insert(kind, FieldState::Valid);
                }
            }
        }

        result
    }
}

/// Validation attached to a live page.
///
/// Created once the document is ready. Each validated input owns a
/// [`Debouncer`], so input events must be delivered from within a tokio
/// runtime.
pub struct FormController {
    shared: Arc<Shared>,
    listeners: HashMap<FieldKind, Debouncer<String>>,
}

impl FormController {
    /// Resolve the form fields and attach real-time validation to them.
    pub fn attach(document: Arc<Mutex<Document>>, config: &FormConfig) -> Result<Self, FormError> {
        let fields = FormFields::resolve(&lock(&document), config)?;

        let shared = Arc::new(Shared {
            document,
            fields,
            rules: FormRules::from_config(config),
            states: Mutex::new(HashMap::new()),
        });

        let listeners = FieldKind::ALL
            .into_iter()
            .map(|kind| {
                let shared = Arc::clone(&shared);
                let debouncer = Debouncer::new(config.debounce(), move |value: String| {
                    shared.revalidate(kind, &value);
                });
                (kind, debouncer)
            })
            .collect();

        debug!(
            "Attached validation to #{} and #{} ({}ms debounce)",
            shared.fields.name, shared.fields.dob, config.debounce_ms
        );

        Ok(Self { shared, listeners })
    }

    /// Dispatch a page event.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match event {
            Event::Input { target, value } => {
                self.on_input(target, value);
                EventOutcome::Continue
            }
            Event::Submit { target } => {
                if self.shared.fields.form.as_deref() == Some(target.as_str()) {
                    self.on_submit()
                } else {
                    EventOutcome::Continue
                }
            }
        }
    }

    /// Record a keystroke's resulting value and (re)arm that field's timer.
    pub fn on_input(&mut self, target: &str, value: &str) {
        if let Err(e) = lock(&self.shared.document).set_value(target, value) {
            warn!("Input on unknown element: {e}");
            return;
        }

        let Some(kind) = self.shared.fields.kind_of(target) else {
            return;
        };
        if let Some(listener) = self.listeners.get_mut(&kind) {
            listener.trigger(value.to_string());
        }
    }

    /// Validate everything; prevent submission on failure.
    pub fn on_submit(&self) -> EventOutcome {
        let result = self.shared.validate();
        if result.is_valid() {
            debug!("Form valid, submitting");
            EventOutcome::Continue
        } else {
            debug!("Submission blocked: {}", result.message());
            EventOutcome::Prevented
        }
    }

    /// Run submit-time validation without a submit event.
    pub fn validate(&self) -> ValidationResult {
        self.shared.validate()
    }

    pub fn field_state(&self, kind: FieldKind) -> FieldState {
        lock(&self.shared.states)
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a real-time check for `kind` is still waiting to run.
    pub fn is_pending(&self, kind: FieldKind) -> bool {
        self.listeners
            .get(&kind)
            .is_some_and(Debouncer::is_pending)
    }

    pub fn fields(&self) -> &FormFields {
        &self.shared.fields
    }

    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.shared.document)
    }
}
