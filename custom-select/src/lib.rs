pub mod config;
pub mod error;
pub mod native;
pub mod option;
pub mod select;

pub use config::{ClassNames, SelectConfig};
pub use error::SelectError;
pub use native::{NativeOption, NativeOptionRef, NativeSelect};
pub use option::{extract_options, SelectOption};
pub use select::{Debounce, EventResult, SelectState, SelectWidget, TypeAhead};

pub mod prelude {
    pub use crate::config::{ClassNames, SelectConfig};
    pub use crate::error::SelectError;
    pub use crate::native::{NativeOption, NativeSelect};
    pub use crate::select::{EventResult, SelectState, SelectWidget};
    pub use tuidom::{Element, Event, Key, Modifiers};
}
