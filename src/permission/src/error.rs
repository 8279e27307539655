//! Error types for permission parsing, formatting and configuration

use thiserror::Error;

/// Result type alias for permission operations
pub type Result<T> = std::result::Result<T, PermissionError>;

/// Errors returned by parse, format and configuration operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Attempted to format a permission with no name
    #[error("the permission name is empty")]
    EmptyName,

    /// Attempted to parse an empty string
    #[error("the given input is an empty string")]
    EmptyInput,

    /// Text is not of the form `<name>[<delimiter><sub>]`
    #[error("the given input is not in the correct format: {input:?}")]
    BadFormat { input: String },

    /// Rejected delimiter/separator pair
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// A definitions table could not be decoded
    #[error("invalid definitions: {0}")]
    InvalidDefinitions(String),
}

impl PermissionError {
    pub(crate) fn bad_format(input: &str) -> Self {
        PermissionError::BadFormat {
            input: input.to_string(),
        }
    }
}
