//! The prediction page markup.

use formdom::{Document, Element, Selector};

use crate::config::FormConfig;
use crate::error::FormError;

fn form_group(label: &str, input: Element) -> Element {
    Element::div()
        .class("form-group")
        .child(Element::label(label))
        .child(input)
}

fn submit_button(selector: &Selector) -> Element {
    let button = Element::button("Reveal My Destiny");
    match selector {
        Selector::Id(id) => button.id(id.as_str()),
        Selector::Class(class) => button.id("submit").class(class.as_str()),
        Selector::Tag(_) => button.id("submit"),
    }
}

/// The prediction form as served: a name input, a date-of-birth input and
/// a submit button inside `form#predictionForm`.
pub fn prediction_page() -> Document {
    Document::new(page_body(&FormConfig::default(), &Selector::Class("submit-btn".into())))
}

/// The prediction page with the element ids and submit selector named by
/// `config`.
///
/// A tag selector is honored as long as it names `button`.
pub fn page_for(config: &FormConfig) -> Result<Document, FormError> {
    let selector: Selector = config.submit_selector.parse()?;
    Ok(Document::new(page_body(config, &selector)))
}

fn page_body(config: &FormConfig, submit: &Selector) -> Element {
    Element::body().id("page").child(
        Element::form()
            .id(config.form_id.as_str())
            .child(form_group(
                "Your Name",
                Element::input("").id(config.name_id.as_str()),
            ))
            .child(form_group(
                "Date of Birth",
                Element::input("").id(config.dob_id.as_str()),
            ))
            .child(submit_button(submit)),
    )
}
