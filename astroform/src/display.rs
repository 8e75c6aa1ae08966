//! Inline error rendering.
//!
//! A failed field gets a `div.error-message` right after it and a red
//! border/glow. [`clear_errors`] undoes both for the whole page at once.

use std::sync::LazyLock;

use formdom::{
    Border, BoxShadow, Color, Document, DomError, Edges, Element, Length, Selector, Style,
};
use log::debug;

/// Class carried by every inline error node.
pub const ERROR_CLASS: &str = "error-message";

/// Accent used for the error text, border and glow.
pub static ERROR_RED: LazyLock<Color> =
    LazyLock::new(|| Color::hex("#ff6b6b").expect("Invalid error color"));

/// Fixed inline style of an error node.
pub fn error_message_style() -> Style {
    let red = *ERROR_RED;
    Style::new()
        .color(red)
        .font_size(Length::Rem(0.85))
        .margin_top(Length::Px(5))
        .padding(Edges::symmetric(5, 10))
        .background(red.alpha(0.1))
        .border_radius(Length::Px(5))
        .border_left(Border::solid(3, red))
}

fn error_selector() -> Selector {
    Selector::Class(ERROR_CLASS.to_string())
}

fn input_selector() -> Selector {
    Selector::Tag("input".to_string())
}

/// Show `message` directly after the field and mark the field invalid.
pub fn show_error(doc: &mut Document, field_id: &str, message: &str) -> Result<(), DomError> {
    let node = Element::div()
        .class(ERROR_CLASS)
        .style(error_message_style())
        .text(message);

    doc.insert_after(field_id, node)?;
    let red = *ERROR_RED;
    doc.update_style(field_id, |style| {
        style.border_color = Some(red);
        style.box_shadow = Some(BoxShadow::ring(2, red.alpha(0.2)));
    })?;

    debug!("Showing error on #{field_id}: {message}");
    Ok(())
}

/// Remove every error node and reset the marking of every input.
///
/// Returns the number of error nodes removed.
pub fn clear_errors(doc: &mut Document) -> usize {
    let removed = doc.remove_all(&error_selector());
    doc.for_each_mut(&input_selector(), |input| {
        input.style.border_color = None;
        input.style.box_shadow = None;
    });

    if removed > 0 {
        debug!("Cleared {removed} error message(s)");
    }
    removed
}

/// Messages currently displayed, in document order.
pub fn displayed_errors(doc: &Document) -> Vec<String> {
    doc.select(&error_selector())
        .into_iter()
        .map(Element::text_content)
        .collect()
}
