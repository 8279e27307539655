//! Permission type and its text encoding

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{PermissionError, Result};
use crate::notation::{self, Notation};

/// A single permission: a name and an optional sub-permission
///
/// An empty `sub` means the permission as a whole, including every
/// sub-permission it implies. Two permissions are equal when both fields are
/// equal; no implied-subset semantics are involved.
///
/// Permissions encode to `<name>` or `<name><delimiter><sub>` and serialize as
/// that single string.
///
/// # Examples
///
/// ```
/// use scoped_permission::Permission;
///
/// let perm = Permission::parse("user.edit").unwrap();
/// assert_eq!(perm.name, "user");
/// assert_eq!(perm.sub, "edit");
/// assert_eq!(perm.to_string(), "user.edit");
///
/// let json = serde_json::to_string(&perm).unwrap();
/// assert_eq!(json, r#""user.edit""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Permission {
    /// Name of the permission
    pub name: String,

    /// Optional sub-permission, empty when absent
    pub sub: String,
}

impl Permission {
    /// Creates a permission without a sub-permission
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub: String::new(),
        }
    }

    /// Creates a permission with a sub-permission
    pub fn with_sub(name: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub: sub.into(),
        }
    }

    /// Parses a permission using the global notation
    ///
    /// # Errors
    ///
    /// See [`Permission::parse_with`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &notation::global())
    }

    /// Parses a permission using the given notation
    ///
    /// Text without a delimiter is taken whole as the name. Otherwise it must
    /// split into exactly two non-empty fragments.
    ///
    /// # Errors
    ///
    /// - `PermissionError::EmptyInput` if `text` is empty
    /// - `PermissionError::BadFormat` if the delimiter appears more than once
    ///   or either fragment is empty
    pub fn parse_with(text: &str, notation: &Notation) -> Result<Self> {
        if text.is_empty() {
            return Err(PermissionError::EmptyInput);
        }

        let delimiter = notation.delimiter();
        if !text.contains(delimiter) {
            return Ok(Self::new(text));
        }

        let mut fragments = text.split(delimiter);
        match (fragments.next(), fragments.next(), fragments.next()) {
            (Some(name), Some(sub), None) if !name.is_empty() && !sub.is_empty() => {
                Ok(Self::with_sub(name, sub))
            }
            _ => Err(PermissionError::bad_format(text)),
        }
    }

    /// Formats the permission using the global notation
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::EmptyName` if the name is empty.
    pub fn format(&self) -> Result<String> {
        self.format_with(&notation::global())
    }

    /// Formats the permission using the given notation
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::EmptyName` if the name is empty.
    pub fn format_with(&self, notation: &Notation) -> Result<String> {
        if self.name.is_empty() {
            return Err(PermissionError::EmptyName);
        }

        if self.sub.is_empty() {
            return Ok(self.name.clone());
        }

        Ok(format!("{}{}{}", self.name, notation.delimiter(), self.sub))
    }

    /// Returns the sub-permission, if any
    pub fn sub(&self) -> Option<&str> {
        if self.sub.is_empty() {
            None
        } else {
            Some(&self.sub)
        }
    }

    /// Reports whether both the name and the sub-permission are empty
    pub fn is_zero(&self) -> bool {
        self.name.is_empty() && self.sub.is_empty()
    }
}

/// Renders the text form with the global notation.
///
/// Unlike [`Permission::format`] this never fails: an empty name is rendered
/// as-is.
impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub.is_empty() {
            return f.write_str(&self.name);
        }

        let notation = notation::global();
        write!(f, "{}{}{}", self.name, notation.delimiter(), self.sub)
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Permission {
    type Error = PermissionError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.format().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
