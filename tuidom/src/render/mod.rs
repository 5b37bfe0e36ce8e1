use crate::element::Element;
use crate::scroll::visible_range;

/// Flatten an element tree into text lines, one per text element.
///
/// Hidden subtrees are skipped, and scrollable containers only contribute the
/// children inside their viewport. `decorate` is asked for each element's
/// line prefix; returning `None` skips the element and its subtree.
pub fn render_lines<F>(root: &Element, decorate: &F) -> Vec<String>
where
    F: Fn(&Element) -> Option<String>,
{
    let mut lines = Vec::new();
    render_recursive(root, decorate, &mut lines);
    lines
}

fn render_recursive<F>(element: &Element, decorate: &F, lines: &mut Vec<String>)
where
    F: Fn(&Element) -> Option<String>,
{
    if element.hidden {
        return;
    }
    let Some(prefix) = decorate(element) else {
        return;
    };

    if let Some(text) = element.text_content() {
        lines.push(format!("{prefix}{text}"));
        return;
    }

    let children = element.child_elements();
    let range = if element.scrollable {
        visible_range(element)
    } else {
        0..children.len()
    };
    for child in &children[range] {
        render_recursive(child, decorate, lines);
    }
}
