//! Select widget errors.

use thiserror::Error;

/// Contract violations surfaced by the select widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The native source had no entries to mirror.
    #[error("select '{source_id}' has no options")]
    NoOptions {
        /// Element id of the native source.
        source_id: String,
    },

    /// `select_value` was given a value that no option carries.
    #[error("no option with value '{0}'")]
    UnknownValue(String),

    /// The page passed to `mount` does not contain the native source element.
    #[error("source element '{0}' not found in page")]
    SourceNotFound(String),

    /// The rendered list lost the entry for a known option.
    #[error("rendered entry '{0}' is missing")]
    MissingEntry(String),
}
