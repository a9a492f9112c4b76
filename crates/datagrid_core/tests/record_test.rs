//! Tests for field path resolution on records.

use datagrid_core::{Attribute, FieldPath, FieldValue, Record};

struct Group {
    name: String,
}

impl Record for Group {
    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "name" => Some(Attribute::Value(self.name.as_str().into())),
            "display_name" => Some(Attribute::Method(Box::new(move || {
                FieldValue::from(self.name.to_uppercase())
            }))),
            _ => None,
        }
    }
}

struct User {
    username: String,
    group: Option<Group>,
}

impl Record for User {
    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "username" => Some(Attribute::Value(self.username.as_str().into())),
            "group" => Some(match &self.group {
                Some(group) => Attribute::Related(group),
                None => Attribute::Value(FieldValue::Null),
            }),
            _ => None,
        }
    }
}

fn alice() -> User {
    User {
        username: "alice".to_string(),
        group: Some(Group {
            name: "staff".to_string(),
        }),
    }
}

#[test]
fn test_resolve_direct_field() {
    let value = alice().resolve(&FieldPath::parse("username")).unwrap();
    assert_eq!(value, FieldValue::from("alice"));
}

#[test]
fn test_resolve_follows_relation() {
    let value = alice().resolve(&FieldPath::parse("group.name")).unwrap();
    assert_eq!(value, FieldValue::from("staff"));
}

#[test]
fn test_resolve_invokes_method_attribute() {
    let value = alice()
        .resolve(&FieldPath::parse("group.display_name"))
        .unwrap();
    assert_eq!(value, FieldValue::from("STAFF"));
}

#[test]
fn test_resolve_missing_field_names_segment() {
    let err = alice().resolve(&FieldPath::parse("email")).unwrap_err();
    assert_eq!(err.field, "email");

    let err = alice().resolve(&FieldPath::parse("group.email")).unwrap_err();
    assert_eq!(err.field, "email");
}

#[test]
fn test_resolve_through_scalar_is_not_defined() {
    let err = alice()
        .resolve(&FieldPath::parse("username.length"))
        .unwrap_err();
    assert_eq!(err.field, "username");
}

#[test]
fn test_resolve_unset_relation_is_null() {
    let user = User {
        username: "bob".to_string(),
        group: None,
    };
    let value = user.resolve(&FieldPath::parse("group.name")).unwrap();
    assert!(value.is_null());
}

#[test]
fn test_relation_itself_is_not_a_value() {
    let err = alice().resolve(&FieldPath::parse("group")).unwrap_err();
    assert_eq!(err.field, "group");
}

#[test]
fn test_json_record_requires_an_object() {
    let err = datagrid_core::JsonRecord::try_from(serde_json::json!(["user_0"])).unwrap_err();
    assert_eq!(
        err.kind,
        datagrid_error::ConfigErrorKind::NotAnObject("[\"user_0\"]".to_string())
    );
}
