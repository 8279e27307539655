//! # Scoped permissions
//!
//! Hierarchical access permissions written as dotted strings, with support for:
//! - Parsing and formatting single permissions (`user.edit`)
//! - Scopes: ordered, comma-separated permission lists (`user.edit,profile`)
//! - Definitions describing the legal and implied sub-permissions of a name
//! - A top-level `require` check over raw scope strings
//! - A configurable notation (delimiter and separator)
//!
//! ## Example
//!
//! ```rust
//! use scoped_permission::{Definition, Definitions};
//!
//! let definitions: Definitions = vec![
//!     Definition::new("user")
//!         .with_subset(["read", "edit", "delete"])
//!         .with_default_subset(["read", "edit"]),
//!     Definition::new("profile"),
//! ]
//! .into_iter()
//! .collect();
//!
//! // A bare `user` grant implies the default subset only.
//! assert!(definitions.require("user.edit", "user,profile"));
//! assert!(!definitions.require("user.delete", "user,profile"));
//!
//! // Any one of the required permissions is enough.
//! assert!(definitions.require("user.delete,profile", "profile"));
//! ```

pub mod definition;
pub mod error;
pub mod notation;
pub mod permission;
pub mod scope;

pub use definition::{Definition, Definitions};
pub use error::{PermissionError, Result};
pub use notation::Notation;
pub use permission::Permission;
pub use scope::Scope;
