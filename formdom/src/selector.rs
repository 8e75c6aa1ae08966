use std::str::FromStr;

use crate::element::Element;
use crate::error::DomError;

/// A simple selector: `#id`, `.class` or `tag`.
///
/// Compound and descendant selectors are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomError::InvalidSelector(s.to_string());

        let (ctor, name): (fn(String) -> Selector, &str) = match s.chars().next() {
            Some('#') => (Selector::Id, &s[1..]),
            Some('.') => (Selector::Class, &s[1..]),
            Some(_) => (Selector::Tag, s),
            None => return Err(invalid()),
        };

        if !is_ident(name) {
            return Err(invalid());
        }

        Ok(ctor(name.to_string()))
    }
}
