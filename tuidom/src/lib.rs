pub mod element;
pub mod event;
pub mod focus;
pub mod render;
pub mod scroll;
pub mod terminal;

pub use element::{find_by_class, find_element, find_element_mut, find_parent_mut, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use render::render_lines;
pub use scroll::{item_rows, scroll_into_view, visible_range};
pub use terminal::Terminal;
