//! Definitions module for definition-based authorization.
//!
//! A [`Definition`] declares, for one permission name:
//! - `subset`: every sub-permission that is legal under the name
//! - `default_subset`: the sub-permissions implied by a bare grant of the name
//!
//! [`Definitions`] is an ordered table of definitions with lookup by
//! permission and the top-level `require` check.
//!
//! ## Example
//!
//! ```rust
//! use scoped_permission::{Definition, Permission};
//!
//! let def = Definition::new("user")
//!     .with_subset(["read", "edit", "delete"])
//!     .with_default_subset(["read", "edit"]);
//!
//! let bare = Permission::new("user");
//! assert!(def.allowed(&Permission::with_sub("user", "edit"), &bare));
//! assert!(!def.allowed(&Permission::with_sub("user", "delete"), &bare));
//! ```

mod table;
mod types;

pub use table::Definitions;
pub use types::Definition;
