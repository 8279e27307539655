//! Definition type and the matching rules

use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// Rule describing the sub-permissions of one permission name
///
/// A bare permission (`user`) stands for the `default_subset`, not the whole
/// `subset`. `default_subset` is expected to be contained in `subset`, which
/// is not enforced; see [`Definition::stray_defaults`].
///
/// # Examples
///
/// ```rust
/// use scoped_permission::Definition;
///
/// let def: Definition = serde_json::from_str(
///     r#"{"name": "user", "subset": ["read", "edit"], "defaultSubset": ["read"]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(def.name, "user");
/// assert_eq!(def.default_subset, vec!["read"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Name of the permission
    pub name: String,

    /// All sub-permissions legal under this name
    #[serde(default)]
    pub subset: Vec<String>,

    /// Sub-permissions implied when only the name is granted or required
    #[serde(rename = "defaultSubset", default)]
    pub default_subset: Vec<String>,
}

impl Definition {
    /// Creates a definition without sub-permissions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subset: Vec::new(),
            default_subset: Vec::new(),
        }
    }

    /// Sets the legal sub-permissions
    pub fn with_subset<I, S>(mut self, subset: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subset = subset.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sub-permissions implied by a bare grant
    pub fn with_default_subset<I, S>(mut self, default_subset: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_subset = default_subset.into_iter().map(Into::into).collect();
        self
    }

    /// Reports whether this definition governs the permission
    ///
    /// True when the names are equal and the sub-permission is either absent
    /// or part of `subset`.
    pub fn matches(&self, permission: &Permission) -> bool {
        if permission.name != self.name {
            return false;
        }

        permission.sub.is_empty() || contains(&self.subset, &permission.sub)
    }

    /// Reports whether `given` satisfies `required` under this definition
    ///
    /// Both permissions must carry this definition's name. Then:
    ///
    /// | required | given | allowed when |
    /// |----------|-------|--------------|
    /// | bare | bare | always |
    /// | bare | `x` | `x` in `default_subset` |
    /// | `x` | `y` | `x == y` and `y` in `subset` |
    /// | `x` | bare | `x` in `default_subset` |
    pub fn allowed(&self, required: &Permission, given: &Permission) -> bool {
        if required.name != self.name || required.name != given.name {
            return false;
        }

        match (required.sub.is_empty(), given.sub.is_empty()) {
            (true, true) => true,
            (true, false) => contains(&self.default_subset, &given.sub),
            (false, false) => required.sub == given.sub && contains(&self.subset, &given.sub),
            (false, true) => contains(&self.default_subset, &required.sub),
        }
    }

    /// Returns the default sub-permissions missing from `subset`
    pub fn stray_defaults(&self) -> Vec<&str> {
        self.default_subset
            .iter()
            .filter(|sub| !contains(&self.subset, sub))
            .map(String::as_str)
            .collect()
    }
}

fn contains(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|s| s == needle)
}
