//! Property-based tests for the text encoding

use proptest::prelude::*;
use scoped_permission::{Notation, Permission, PermissionError, Scope};

fn fragment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ -]{1,12}"
}

fn permission() -> impl Strategy<Value = Permission> {
    (fragment(), prop::option::of(fragment())).prop_map(|(name, sub)| match sub {
        Some(sub) => Permission::with_sub(name, sub),
        None => Permission::new(name),
    })
}

proptest! {
    #[test]
    fn test_permission_round_trip(perm in permission()) {
        let notation = Notation::default();
        let text = perm.format_with(&notation).unwrap();
        prop_assert_eq!(Permission::parse_with(&text, &notation).unwrap(), perm);
    }

    #[test]
    fn test_scope_round_trip(perms in prop::collection::vec(permission(), 1..8)) {
        let notation = Notation::default();
        let scope = Scope::from(perms);
        let text = scope.format_with(&notation).unwrap();
        prop_assert_eq!(Scope::parse_with(&text, &notation).unwrap(), scope);
    }

    #[test]
    fn test_round_trip_with_custom_notation(perms in prop::collection::vec(permission(), 1..8)) {
        let notation = Notation::new("::", "|").unwrap();
        let scope = Scope::from(perms);
        let text = scope.format_with(&notation).unwrap();
        prop_assert_eq!(Scope::parse_with(&text, &notation).unwrap(), scope);
    }

    #[test]
    fn test_unnamed_permission_never_formats(sub in "[a-z.]{0,8}") {
        let perm = Permission::with_sub("", sub);
        prop_assert_eq!(
            perm.format_with(&Notation::default()),
            Err(PermissionError::EmptyName)
        );
    }

    #[test]
    fn test_extra_delimiters_are_rejected(parts in prop::collection::vec(fragment(), 3..6)) {
        let text = parts.join(".");
        let is_bad_format = matches!(
            Permission::parse_with(&text, &Notation::default()),
            Err(PermissionError::BadFormat { .. })
        );
        prop_assert!(is_bad_format);
    }
}
