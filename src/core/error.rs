//! Error types for the model layer.

use thiserror::Error;

/// Grid configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A column is bound to a path the row type does not expose.
    #[error("column {column} is bound to unknown path `{path}`")]
    UnknownPath { column: usize, path: String },
}

/// Unrecognised menu-bar theme name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown menu bar theme `{0}` (expected `default` or `tertiary`)")]
pub struct ThemeParseError(pub String);
