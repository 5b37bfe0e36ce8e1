use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Styling hooks. Order is insertion order, names are unique.
    pub classes: Vec<String>,

    // Layout
    /// Removed from layout entirely when true (the element stays in the tree).
    pub hidden: bool,
    /// Viewport height in rows. `None` means the element grows to fit its content.
    pub max_height: Option<u16>,

    // Virtualization hint
    /// Fixed height for all children. Lets scroll math find a child's rows
    /// without laying out its siblings. Defaults to one row when unset.
    pub item_height: Option<u16>,

    // Overflow
    pub scrollable: bool,
    pub scroll_offset: (u16, u16),

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    // Custom data storage (data-* attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            classes: Vec::new(),
            hidden: false,
            max_height: None,
            item_height: None,
            scrollable: false,
            scroll_offset: (0, 0),
            focusable: false,
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_class(&name) {
            return false;
        }
        self.classes.push(name);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, name: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != name);
        self.classes.len() != before
    }

    /// Flip a class on or off. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, name: &str) -> bool {
        if self.remove_class(name) {
            false
        } else {
            self.add_class(name);
            true
        }
    }

    /// Force a class on or off.
    pub fn set_class(&mut self, name: &str, on: bool) {
        if on {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }

    // Layout
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Set fixed item height for scroll calculations.
    pub fn item_height(mut self, height: u16) -> Self {
        self.item_height = Some(height);
        self
    }

    // Overflow
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn scroll_offset(mut self, x: u16, y: u16) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Text
    pub fn text_content(&self) -> Option<&str> {
        self.content.as_text()
    }

    /// Replace the element's content with text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
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

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Insert `sibling` right after the direct child with id `anchor`.
    /// Returns the sibling back if no such child exists.
    pub fn insert_after(&mut self, anchor: &str, sibling: Element) -> Result<(), Element> {
        let Content::Children(children) = &mut self.content else {
            return Err(sibling);
        };
        match children.iter().position(|c| c.id == anchor) {
            Some(i) => {
                children.insert(i + 1, sibling);
                Ok(())
            }
            None => Err(sibling),
        }
    }
}
