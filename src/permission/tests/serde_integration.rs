//! JSON encoding of permissions and scopes

use scoped_permission::{Notation, Permission, Scope};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct AccessToken {
    subject: String,
    scope: Scope,
    primary: Permission,
}

#[test]
fn test_permission_to_json() {
    let json = serde_json::to_string(&Permission::new("a")).unwrap();
    assert_eq!(json, r#""a""#);

    let json = serde_json::to_string(&Permission::with_sub("a", "b")).unwrap();
    assert_eq!(json, r#""a.b""#);

    assert!(serde_json::to_string(&Permission::default()).is_err());
}

#[test]
fn test_permission_from_json() {
    let perm: Permission = serde_json::from_str(r#""a""#).unwrap();
    assert_eq!(perm, Permission::new("a"));

    let perm: Permission = serde_json::from_str(r#""a.b""#).unwrap();
    assert_eq!(perm, Permission::with_sub("a", "b"));

    assert!(serde_json::from_str::<Permission>(r#""""#).is_err());
    assert!(serde_json::from_str::<Permission>(r#""a.b.c""#).is_err());
    assert!(serde_json::from_str::<Permission>(r#"{"name": "a"}"#).is_err());
}

#[test]
fn test_permission_json_round_trip() {
    let perm = Permission::with_sub("user", "edit");

    let json = serde_json::to_string(&perm).unwrap();
    let decoded: Permission = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, perm);
}

#[test]
fn test_scope_to_json() {
    let scope = Scope::from(vec![
        Permission::new("a"),
        Permission::with_sub("b", "i"),
        Permission::with_sub("c", "j"),
    ]);

    let json = serde_json::to_string(&scope).unwrap();
    assert_eq!(json, r#""a,b.i,c.j""#);

    let json = serde_json::to_string(&Scope::new()).unwrap();
    assert_eq!(json, r#""""#);

    let broken = Scope::from(vec![Permission::new("a"), Permission::with_sub("", "b")]);
    assert!(serde_json::to_string(&broken).is_err());
}

#[test]
fn test_scope_from_json() {
    let scope: Scope = serde_json::from_str(r#""a,b.i,c.j, d, e.k""#).unwrap();

    let expected = Scope::from(vec![
        Permission::new("a"),
        Permission::with_sub("b", "i"),
        Permission::with_sub("c", "j"),
        Permission::new(" d"),
        Permission::with_sub(" e", "k"),
    ]);
    assert_eq!(scope, expected);

    assert!(serde_json::from_str::<Scope>(r#""a,b.""#).is_err());
}

#[test]
fn test_embedded_in_struct() {
    let token = AccessToken {
        subject: "alice".to_string(),
        scope: Scope::parse("user.edit,profile,friends").unwrap(),
        primary: Permission::parse("user.edit").unwrap(),
    };

    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "subject": "alice",
            "scope": "user.edit,profile,friends",
            "primary": "user.edit",
        })
    );

    let decoded: AccessToken = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, token);
}

#[test]
fn test_notation_from_config() {
    let notation: Notation =
        serde_json::from_str(r#"{"delimiter": ":", "separator": ";"}"#).unwrap();

    let scope = Scope::parse_with("user:edit;profile", &notation).unwrap();
    assert_eq!(scope[0], Permission::with_sub("user", "edit"));
    assert_eq!(scope[1], Permission::new("profile"));
}
