use std::ops::Range;

use crate::element::Element;

/// Row span `[top, bottom)` of the child at `index` inside a container whose
/// children all share `item_height` rows.
pub fn item_rows(container: &Element, index: usize) -> (u32, u32) {
    let height = container.item_height.unwrap_or(1) as u32;
    let top = index as u32 * height;
    (top, top + height)
}

/// Scroll `container` vertically so the child at `index` is visible, moving
/// the viewport as little as possible. Nothing moves if the child is already
/// fully visible or the container has no bounded viewport.
///
/// Returns true if the scroll offset changed.
pub fn scroll_into_view(container: &mut Element, index: usize) -> bool {
    let Some(viewport) = container.max_height else {
        return false;
    };
    let viewport = viewport as u32;
    let (top, bottom) = item_rows(container, index);
    let current = container.scroll_offset.1 as u32;

    let new_y = if top < current || bottom - top >= viewport {
        top
    } else if bottom > current + viewport {
        bottom - viewport
    } else {
        current
    };

    if new_y == current {
        return false;
    }

    log::debug!(
        "scroll_into_view id={} index={} offset {} -> {}",
        container.id,
        index,
        current,
        new_y
    );
    container.scroll_offset.1 = new_y.min(u16::MAX as u32) as u16;
    true
}

/// Indices of the children currently inside the container's viewport.
pub fn visible_range(container: &Element) -> Range<usize> {
    let count = container.child_elements().len();
    let Some(viewport) = container.max_height else {
        return 0..count;
    };
    let height = container.item_height.unwrap_or(1).max(1) as usize;
    let offset = container.scroll_offset.1 as usize;
    let first = (offset / height).min(count);
    let last = (offset + viewport as usize).div_ceil(height).min(count);
    first..last
}
