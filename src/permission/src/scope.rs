//! Scope: an ordered list of permissions

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{PermissionError, Result};
use crate::notation::{self, Notation};
use crate::permission::Permission;

/// An ordered set of permissions held by a principal
///
/// Order is kept so that text round-trips exactly; it plays no part in
/// authorization. A scope encodes to its permissions joined by the separator
/// and serializes as that single string.
///
/// # Examples
///
/// ```
/// use scoped_permission::{Permission, Scope};
///
/// let scope = Scope::parse("user.edit,profile,friends").unwrap();
/// assert_eq!(scope.len(), 3);
/// assert_eq!(scope[0], Permission::with_sub("user", "edit"));
/// assert_eq!(scope.format().unwrap(), "user.edit,profile,friends");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scope(Vec<Permission>);

impl Scope {
    /// Creates an empty scope
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a scope using the global notation
    ///
    /// # Errors
    ///
    /// See [`Scope::parse_with`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &notation::global())
    }

    /// Parses a scope using the given notation
    ///
    /// Fragments are not trimmed: `"a, b"` yields a permission named `" b"`.
    ///
    /// # Errors
    ///
    /// - `PermissionError::EmptyInput` if `text` is empty
    /// - The first error returned by [`Permission::parse_with`] for any
    ///   fragment; no partial scope is returned
    pub fn parse_with(text: &str, notation: &Notation) -> Result<Self> {
        if text.is_empty() {
            return Err(PermissionError::EmptyInput);
        }

        text.split(notation.separator())
            .map(|fragment| Permission::parse_with(fragment, notation))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Formats the scope using the global notation
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::EmptyName` for the first unnamed permission.
    pub fn format(&self) -> Result<String> {
        self.format_with(&notation::global())
    }

    /// Formats the scope using the given notation
    ///
    /// An empty scope formats to an empty string.
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::EmptyName` for the first unnamed permission.
    pub fn format_with(&self, notation: &Notation) -> Result<String> {
        let parts = self
            .0
            .iter()
            .map(|perm| perm.format_with(notation))
            .collect::<Result<Vec<_>>>()?;

        Ok(parts.join(notation.separator()))
    }

    /// Appends a permission
    pub fn push(&mut self, permission: Permission) {
        self.0.push(permission);
    }

    /// Consumes the scope, returning its permissions
    pub fn into_inner(self) -> Vec<Permission> {
        self.0
    }
}

impl Deref for Scope {
    type Target = [Permission];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Permission>> for Scope {
    fn from(permissions: Vec<Permission>) -> Self {
        Self(permissions)
    }
}

impl FromIterator<Permission> for Scope {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Scope {
    type Item = Permission;
    type IntoIter = std::vec::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Permission;
    type IntoIter = std::slice::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders each permission with [`Permission`]'s `Display`, joined by the
/// global separator.
impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = notation::global();
        for (i, perm) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(notation.separator())?;
            }
            write!(f, "{}", perm)?;
        }
        Ok(())
    }
}

impl FromStr for Scope {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Scope {
    type Error = PermissionError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.format().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
