//! Textual notation for permissions and scopes
//!
//! A [`Notation`] holds the delimiter placed between a permission name and its
//! sub-permission (`.` by default) and the separator placed between the
//! permissions of a scope (`,` by default).
//!
//! Callers that want deterministic formatting build a `Notation` once and use
//! the `*_with` functions. Everything else goes through the process-wide
//! notation held by this module, which can be replaced at runtime with
//! [`set_global`], [`set_delimiter`] or [`set_separator`].
//!
//! # Thread Safety
//!
//! Writes to the global notation are serialized by a lock. A parse or format
//! call racing a setter may observe either the old or the new notation, so
//! callers should configure it at startup, before concurrent use.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{PermissionError, Result};

/// Default delimiter between a permission name and its sub-permission
pub const DEFAULT_DELIMITER: &str = ".";

/// Default separator between the permissions of a scope
pub const DEFAULT_SEPARATOR: &str = ",";

/// Delimiter and separator used to read and write permissions
///
/// # Examples
///
/// ```
/// use scoped_permission::{Notation, Permission};
///
/// let notation = Notation::new(":", ";").unwrap();
/// let perm = Permission::parse_with("user:edit", &notation).unwrap();
/// assert_eq!(perm, Permission::with_sub("user", "edit"));
/// assert_eq!(perm.format_with(&notation).unwrap(), "user:edit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NotationConfig")]
pub struct Notation {
    delimiter: String,
    separator: String,
}

impl Notation {
    /// Creates a notation from a delimiter and a separator
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::InvalidNotation` if:
    /// - The delimiter or the separator is empty
    /// - The delimiter and the separator are identical, or one contains the
    ///   other
    pub fn new(delimiter: impl Into<String>, separator: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        let separator = separator.into();

        if delimiter.is_empty() {
            return Err(PermissionError::InvalidNotation(
                "delimiter cannot be empty".to_string(),
            ));
        }

        if separator.is_empty() {
            return Err(PermissionError::InvalidNotation(
                "separator cannot be empty".to_string(),
            ));
        }

        if delimiter == separator {
            return Err(PermissionError::InvalidNotation(format!(
                "delimiter and separator are both {:?}",
                delimiter
            )));
        }

        if delimiter.contains(separator.as_str()) || separator.contains(delimiter.as_str()) {
            return Err(PermissionError::InvalidNotation(format!(
                "delimiter {:?} and separator {:?} overlap",
                delimiter, separator
            )));
        }

        Ok(Self {
            delimiter,
            separator,
        })
    }

    /// Returns the delimiter placed between a name and its sub-permission
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the separator placed between the permissions of a scope
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Unvalidated notation as it appears in configuration files
#[derive(Debug, Deserialize)]
#[serde(default)]
struct NotationConfig {
    delimiter: String,
    separator: String,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TryFrom<NotationConfig> for Notation {
    type Error = PermissionError;

    fn try_from(config: NotationConfig) -> Result<Self> {
        Notation::new(config.delimiter, config.separator)
    }
}

static GLOBAL: Lazy<RwLock<Arc<Notation>>> =
    Lazy::new(|| RwLock::new(Arc::new(Notation::default())));

/// Returns a snapshot of the process-wide notation
pub fn global() -> Arc<Notation> {
    Arc::clone(&GLOBAL.read())
}

/// Replaces the process-wide notation
pub fn set_global(notation: Notation) {
    tracing::debug!(
        delimiter = notation.delimiter(),
        separator = notation.separator(),
        "global notation changed"
    );
    *GLOBAL.write() = Arc::new(notation);
}

/// Restores the process-wide notation to `.` and `,`
pub fn reset_global() {
    set_global(Notation::default());
}

/// Sets the process-wide delimiter, keeping the current separator
///
/// # Errors
///
/// Returns `PermissionError::InvalidNotation` if the delimiter is empty or
/// overlaps the current separator. The global notation is left untouched.
pub fn set_delimiter(delimiter: &str) -> Result<()> {
    let mut guard = GLOBAL.write();
    let notation = Notation::new(delimiter, guard.separator())?;
    tracing::debug!(delimiter, "global delimiter changed");
    *guard = Arc::new(notation);
    Ok(())
}

/// Sets the process-wide separator, keeping the current delimiter
///
/// # Errors
///
/// Returns `PermissionError::InvalidNotation` if the separator is empty or
/// overlaps the current delimiter. The global notation is left untouched.
pub fn set_separator(separator: &str) -> Result<()> {
    let mut guard = GLOBAL.write();
    let notation = Notation::new(guard.delimiter(), separator)?;
    tracing::debug!(separator, "global separator changed");
    *guard = Arc::new(notation);
    Ok(())
}
