mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Locate the sibling list holding the element with `id`, plus its index.
pub(crate) fn sibling_slot<'a>(
    root: &'a mut Element,
    id: &str,
) -> Option<(&'a mut Vec<Element>, usize)> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|child| child.id == id) {
        return Some((children, index));
    }

    children
        .iter_mut()
        .find_map(|child| sibling_slot(child, id))
}

/// Depth-first, document-order traversal.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.content.children() {
        walk(child, visit);
    }
}

pub(crate) fn walk_mut(root: &mut Element, visit: &mut impl FnMut(&mut Element)) {
    visit(root);
    if let Content::Children(children) = &mut root.content {
        for child in children {
            walk_mut(child, visit);
        }
    }
}
