use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Form state
    /// Current value of an `input` element. Empty for everything else.
    pub value: String,

    // Visual
    /// Inline style (the `style` attribute).
    pub style: Style,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            content: Content::None,
            value: String::new(),
            style: Style::default(),
        }
    }
}

impl Element {
    fn tagged(tag: &str) -> Self {
        Self {
            id: generate_id(tag),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::tagged("div")
    }

    pub fn body() -> Self {
        Self::tagged("body")
    }

    pub fn form() -> Self {
        Self::tagged("form")
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::tagged("input")
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            ..Self::tagged("button")
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::tagged("label")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Text of this element and its descendants, concatenated in document order.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    // Form state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }
}
