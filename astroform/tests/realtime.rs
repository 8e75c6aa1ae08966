use std::sync::{Arc, Mutex};
use std::time::Duration;

use astroform::display::displayed_errors;
use astroform::page::prediction_page;
use astroform::{EventOutcome, FieldKind, FieldState, FormConfig, FormController};
use formdom::{Document, Element, Event};

const QUIET: Duration = Duration::from_millis(600);

fn attach() -> (FormController, Arc<Mutex<Document>>) {
    let document = Arc::new(Mutex::new(prediction_page()));
    let form = FormController::attach(Arc::clone(&document), &FormConfig::default()).unwrap();
    (form, document)
}

fn errors(document: &Arc<Mutex<Document>>) -> Vec<String> {
    displayed_errors(&document.lock().unwrap())
}

fn type_into(form: &mut FormController, id: &str, text: &str) {
    let mut value = String::new();
    for c in text.chars() {
        value.push(c);
        form.handle_event(&Event::input(id, value.clone()));
    }
}

// ============================================================================
// Real-time validation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_nothing_happens_until_quiet_period() {
    let (mut form, document) = attach();

    type_into(&mut form, "name", "J");
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(form.is_pending(FieldKind::Name));
    assert!(errors(&document).is_empty());
    assert_eq!(form.field_state(FieldKind::Name), FieldState::Untouched);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!form.is_pending(FieldKind::Name));
    assert_eq!(errors(&document), ["Name must be at least 2 characters long"]);
}

#[tokio::test(start_paused = true)]
async fn test_burst_validates_final_value_once() {
    let (mut form, document) = attach();

    // Intermediate values ("1", "15-", ...) are invalid dates.
    for step in ["1", "15", "15-", "15-05", "15-05-", "15-05-1990"] {
        form.handle_event(&Event::input("dob", step));
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    tokio::time::sleep(QUIET).await;

    assert!(errors(&document).is_empty());
    assert_eq!(form.field_state(FieldKind::DateOfBirth), FieldState::Valid);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_then_fixed() {
    let (mut form, document) = attach();

    type_into(&mut form, "dob", "31-04-1990");
    tokio::time::sleep(QUIET).await;
    assert_eq!(errors(&document), ["Please enter a valid date (e.g., 15-05-1990)"]);
    assert_eq!(
        form.field_state(FieldKind::DateOfBirth),
        FieldState::Invalid("Please enter a valid date (e.g., 15-05-1990)".into())
    );

    form.handle_event(&Event::input("dob", "30-04-1990"));
    tokio::time::sleep(QUIET).await;
    assert!(errors(&document).is_empty());

    let doc = document.lock().unwrap();
    assert!(doc.get_element_by_id("dob").unwrap().style.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cleared_field_shows_nothing() {
    let (mut form, document) = attach();

    type_into(&mut form, "name", "J1");
    tokio::time::sleep(QUIET).await;
    assert_eq!(errors(&document).len(), 1);

    form.handle_event(&Event::input("name", ""));
    tokio::time::sleep(QUIET).await;
    assert!(errors(&document).is_empty());
    assert_eq!(form.field_state(FieldKind::Name), FieldState::Untouched);
}

#[tokio::test(start_paused = true)]
async fn test_other_field_clears_errors_globally() {
    let (mut form, document) = attach();

    type_into(&mut form, "name", "John123");
    tokio::time::sleep(QUIET).await;
    assert_eq!(
        errors(&document),
        ["Name can only contain letters, spaces, hyphens, apostrophes, and periods"]
    );

    type_into(&mut form, "dob", "1990-05-15");
    tokio::time::sleep(QUIET).await;
    assert!(errors(&document).is_empty());
    assert_eq!(form.field_state(FieldKind::Name), FieldState::Untouched);
    assert_eq!(form.field_state(FieldKind::DateOfBirth), FieldState::Valid);
}

#[tokio::test(start_paused = true)]
async fn test_fields_debounce_independently() {
    let (mut form, _document) = attach();

    form.handle_event(&Event::input("name", "Jo"));
    tokio::time::sleep(Duration::from_millis(300)).await;
    form.handle_event(&Event::input("dob", "15/05/1990"));
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Name fired at 500ms; dob still waiting until 800ms.
    assert_eq!(form.field_state(FieldKind::Name), FieldState::Valid);
    assert!(form.is_pending(FieldKind::DateOfBirth));

    tokio::time::sleep(QUIET).await;
    assert_eq!(form.field_state(FieldKind::DateOfBirth), FieldState::Valid);
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_blocked_then_allowed() {
    let (mut form, document) = attach();

    assert_eq!(
        form.handle_event(&Event::submit("predictionForm")),
        EventOutcome::Prevented
    );
    assert_eq!(errors(&document), ["Please enter your name"]);
    assert_eq!(
        form.field_state(FieldKind::Name),
        FieldState::Invalid("Please enter your name".into())
    );

    form.handle_event(&Event::input("name", "Mary-Jane O'Brien"));
    form.handle_event(&Event::input("dob", "15-05-1990"));

    // Submitting does not wait for pending real-time checks.
    assert_eq!(
        form.handle_event(&Event::submit("predictionForm")),
        EventOutcome::Continue
    );
    assert!(errors(&document).is_empty());
    assert_eq!(form.field_state(FieldKind::Name), FieldState::Valid);
    assert_eq!(form.field_state(FieldKind::DateOfBirth), FieldState::Valid);
}

#[tokio::test(start_paused = true)]
async fn test_submit_reports_future_date() {
    let (mut form, document) = attach();

    form.handle_event(&Event::input("name", "Jo"));
    form.handle_event(&Event::input("dob", "31-13-2050"));

    assert_eq!(form.on_submit(), EventOutcome::Prevented);
    assert_eq!(errors(&document), ["Date of birth cannot be in the future"]);
}

#[tokio::test(start_paused = true)]
async fn test_submit_of_unrelated_form_passes_through() {
    let (mut form, _document) = attach();
    assert_eq!(
        form.handle_event(&Event::submit("newsletter")),
        EventOutcome::Continue
    );
}

#[tokio::test(start_paused = true)]
async fn test_page_without_form_never_blocks() {
    let document = Arc::new(Mutex::new(Document::new(
        Element::body()
            .child(Element::input("").id("name"))
            .child(Element::input("").id("dob")),
    )));
    let mut form = FormController::attach(document, &FormConfig::default()).unwrap();

    assert!(form.fields().form.is_none());
    assert_eq!(
        form.handle_event(&Event::submit("predictionForm")),
        EventOutcome::Continue
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_debounce_and_rules() {
    let document = Arc::new(Mutex::new(prediction_page()));
    let config = FormConfig::default().debounce_ms(100).min_name_length(3);
    let mut form = FormController::attach(Arc::clone(&document), &config).unwrap();

    form.handle_event(&Event::input("name", "Jo"));
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(errors(&document), ["Name must be at least 3 characters long"]);
}

#[test]
fn test_missing_required_input() {
    let document = Arc::new(Mutex::new(Document::new(Element::body())));
    assert!(FormController::attach(document, &FormConfig::default()).is_err());
}
