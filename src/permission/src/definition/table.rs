//! Ordered definitions table and the top-level authorization check

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::Definition;
use crate::error::{PermissionError, Result};
use crate::notation::{self, Notation};
use crate::permission::Permission;
use crate::scope::Scope;

/// Ordered table of definitions
///
/// Lookups go through an index keyed by permission name. When several
/// definitions share a name, they are tried in insertion order and the first
/// one that matches wins.
///
/// # Examples
///
/// ```rust
/// use scoped_permission::Definitions;
///
/// let definitions = Definitions::from_json(r#"[
///     {"name": "a", "subset": ["i", "j", "k"], "defaultSubset": ["i", "j"]},
///     {"name": "b", "subset": ["i", "j", "k"], "defaultSubset": ["i", "j"]}
/// ]"#).unwrap();
///
/// assert!(definitions.require("a,b", "a.k,b.i"));
/// assert!(!definitions.require("a.i", "a.k,b.i"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Definition>", into = "Vec<Definition>")]
pub struct Definitions {
    entries: Vec<Definition>,
    by_name: HashMap<String, Vec<usize>>,
}

impl Definitions {
    /// Creates a table from definitions, keeping their order
    pub fn new(definitions: Vec<Definition>) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(definitions.len()),
            by_name: HashMap::new(),
        };

        for definition in definitions {
            table.push(definition);
        }

        table
    }

    /// Loads a table from a JSON array of definitions
    ///
    /// # Errors
    ///
    /// Returns `PermissionError::InvalidDefinitions` if the document cannot
    /// be decoded.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PermissionError::InvalidDefinitions(e.to_string()))
    }

    /// Appends a definition after the existing ones
    pub fn push(&mut self, definition: Definition) {
        for stray in definition.stray_defaults() {
            tracing::warn!(
                definition = %definition.name,
                sub = stray,
                "default sub-permission is not part of the subset"
            );
        }

        self.by_name
            .entry(definition.name.clone())
            .or_default()
            .push(self.entries.len());
        self.entries.push(definition);
    }

    /// Returns the first definition that matches the permission
    pub fn definition(&self, permission: &Permission) -> Option<&Definition> {
        self.by_name
            .get(&permission.name)?
            .iter()
            .map(|&i| &self.entries[i])
            .find(|definition| definition.matches(permission))
    }

    /// Reports whether the granted scope satisfies at least one required
    /// permission
    ///
    /// Required permissions without a matching definition are skipped.
    pub fn authorize(&self, required: &Scope, given: &Scope) -> bool {
        for req in required.iter() {
            let Some(definition) = self.definition(req) else {
                continue;
            };

            if let Some(grant) = given.iter().find(|g| definition.allowed(req, g)) {
                tracing::trace!(required = %req, given = %grant, "permission granted");
                return true;
            }
        }

        false
    }

    /// Checks raw scope strings using the global notation
    ///
    /// Returns `false` when either argument fails to parse, which makes
    /// malformed input indistinguishable from denied access. Use
    /// [`Definitions::try_require`] to tell them apart.
    pub fn require(&self, required: &str, given: &str) -> bool {
        self.require_with(required, given, &notation::global())
    }

    /// Checks raw scope strings using the given notation
    ///
    /// See [`Definitions::require`].
    pub fn require_with(&self, required: &str, given: &str, notation: &Notation) -> bool {
        match self.try_require_with(required, given, notation) {
            Ok(allowed) => allowed,
            Err(err) => {
                tracing::debug!(required, given, error = %err, "rejecting unparsable scope");
                false
            }
        }
    }

    /// Checks raw scope strings using the global notation, surfacing parse
    /// errors
    ///
    /// # Errors
    ///
    /// Returns the parse error of `required`, or else of `given`.
    pub fn try_require(&self, required: &str, given: &str) -> Result<bool> {
        self.try_require_with(required, given, &notation::global())
    }

    /// Checks raw scope strings using the given notation, surfacing parse
    /// errors
    ///
    /// # Errors
    ///
    /// Returns the parse error of `required`, or else of `given`.
    pub fn try_require_with(
        &self,
        required: &str,
        given: &str,
        notation: &Notation,
    ) -> Result<bool> {
        let required = Scope::parse_with(required, notation)?;
        let given = Scope::parse_with(given, notation)?;
        Ok(self.authorize(&required, &given))
    }

    /// Iterates over the definitions in order
    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.entries.iter()
    }

    /// Returns the number of definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table holds no definition
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Definition>> for Definitions {
    fn from(definitions: Vec<Definition>) -> Self {
        Self::new(definitions)
    }
}

impl From<Definitions> for Vec<Definition> {
    fn from(definitions: Definitions) -> Self {
        definitions.entries
    }
}

impl FromIterator<Definition> for Definitions {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
