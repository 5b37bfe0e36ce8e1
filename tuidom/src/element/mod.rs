mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the element whose direct children include `id`.
pub fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.child_elements().iter().any(|c| c.id == id) {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_parent_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element carrying `class`, in document order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_by_class(root, class, &mut result);
    result
}

fn collect_by_class<'a>(element: &'a Element, class: &str, result: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        result.push(element);
    }
    for child in element.child_elements() {
        collect_by_class(child, class, result);
    }
}
