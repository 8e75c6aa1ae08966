//! The page document: an element tree with DOM-style queries and mutations.

use log::trace;

use crate::element::{find_element, find_element_mut, sibling_slot, walk, walk_mut, Element};
use crate::error::DomError;
use crate::selector::Selector;
use crate::types::Style;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document whose root is `root` (typically a `body`).
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// First element in document order matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Result<Option<&Element>, DomError> {
        Ok(self.select(&selector.parse()?).into_iter().next())
    }

    /// All elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<&Element>, DomError> {
        Ok(self.select(&selector.parse()?))
    }

    pub fn select(&self, selector: &Selector) -> Vec<&Element> {
        let mut found = Vec::new();
        walk(&self.root, &mut |el| {
            if selector.matches(el) {
                found.push(el);
            }
        });
        found
    }

    /// Apply `f` to every element matching `selector`. Returns the match count.
    pub fn for_each_mut(&mut self, selector: &Selector, mut f: impl FnMut(&mut Element)) -> usize {
        let mut count = 0;
        walk_mut(&mut self.root, &mut |el| {
            if selector.matches(el) {
                f(el);
                count += 1;
            }
        });
        count
    }

    pub fn append_child(&mut self, parent_id: &str, child: Element) -> Result<(), DomError> {
        let parent = self.require_mut(parent_id)?;
        trace!("append #{} to #{}", child.id, parent_id);
        parent.push_child(child);
        Ok(())
    }

    /// Insert `node` as the next sibling of the element with `reference_id`.
    pub fn insert_after(&mut self, reference_id: &str, node: Element) -> Result<(), DomError> {
        if self.root.id == reference_id {
            return Err(DomError::RootMutation("given a sibling"));
        }
        let (siblings, index) =
            sibling_slot(&mut self.root, reference_id).ok_or_else(|| {
                DomError::ElementNotFound {
                    id: reference_id.to_string(),
                }
            })?;
        trace!("insert #{} after #{}", node.id, reference_id);
        siblings.insert(index + 1, node);
        Ok(())
    }

    /// Detach the element with `id` (and its subtree) from the document.
    pub fn remove(&mut self, id: &str) -> Result<Element, DomError> {
        if self.root.id == id {
            return Err(DomError::RootMutation("removed"));
        }
        let (siblings, index) = sibling_slot(&mut self.root, id).ok_or_else(|| {
            DomError::ElementNotFound { id: id.to_string() }
        })?;
        Ok(siblings.remove(index))
    }

    /// Detach every element matching `selector`. Returns how many were removed.
    pub fn remove_all(&mut self, selector: &Selector) -> usize {
        let ids: Vec<String> = self
            .select(selector)
            .into_iter()
            .filter(|el| el.id != self.root.id)
            .map(|el| el.id.clone())
            .collect();

        // A matching ancestor may already have taken a match with it.
        ids.iter().filter(|id| self.remove(id.as_str()).is_ok()).count()
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.get_element_by_id(id).map(|el| el.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomError> {
        self.require_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn update_style(&mut self, id: &str, f: impl FnOnce(&mut Style)) -> Result<(), DomError> {
        f(&mut self.require_mut(id)?.style);
        Ok(())
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.root, id).ok_or_else(|| DomError::ElementNotFound {
            id: id.to_string(),
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::body())
    }
}
