//! Tests for predicate composition and evaluation.

use datagrid_core::{FieldValue, JsonRecord, Predicate};
use serde_json::json;

fn user(username: &str, last_name: &str) -> JsonRecord {
    JsonRecord::try_from(json!({
        "username": username,
        "last_name": last_name,
        "logins": 4,
        "manager": null,
    }))
    .expect("Valid record")
}

#[test]
fn test_icontains_is_case_insensitive() {
    let record = user("User_3", "Smith");
    assert!(Predicate::icontains("username", "user_3").matches(&record).unwrap());
    assert!(Predicate::icontains("last_name", "MIT").matches(&record).unwrap());
    assert!(!Predicate::icontains("last_name", "jones").matches(&record).unwrap());
}

#[test]
fn test_icontains_matches_text_form_of_numbers() {
    let record = user("a", "b");
    assert!(Predicate::icontains("logins", "4").matches(&record).unwrap());
}

#[test]
fn test_icontains_never_matches_null() {
    let record = user("a", "b");
    assert!(!Predicate::icontains("manager", "").matches(&record).unwrap());
}

#[test]
fn test_missing_field_is_an_error() {
    let record = user("a", "b");
    let err = Predicate::icontains("nickname", "x").matches(&record).unwrap_err();
    assert_eq!(err.field, "nickname");
}

#[test]
fn test_and_flattens_and_skips_empty() {
    let a = Predicate::icontains("username", "a");
    let b = Predicate::exact("logins", 4);

    assert_eq!(a.clone() & Predicate::empty(), a);
    assert_eq!(Predicate::empty() & a.clone(), a);

    let combined = a.clone() & b.clone() & Predicate::icontains("last_name", "b");
    match combined {
        Predicate::And(inner) => assert_eq!(inner.len(), 3),
        other => panic!("Expected a flat conjunction, got {:?}", other),
    }
}

#[test]
fn test_empty_predicate() {
    assert!(Predicate::empty().is_empty());
    assert!(Predicate::And(vec![Predicate::empty()]).is_empty());
    assert!(!Predicate::exact("logins", 1).is_empty());
    assert!(Predicate::empty().matches(&user("a", "b")).unwrap());
}

#[test]
fn test_or_and_not() {
    let record = user("alice", "smith");
    let either = Predicate::exact("username", "bob") | Predicate::exact("username", "alice");
    assert!(either.matches(&record).unwrap());
    assert!(!(!either).matches(&record).unwrap());
}

#[test]
fn test_exact_compares_numbers_across_types() {
    let record = user("a", "b");
    assert!(
        Predicate::exact("logins", FieldValue::Float(4.0))
            .matches(&record)
            .unwrap()
    );
}

#[test]
fn test_icontains_matches_datetime_as_displayed() {
    let record = JsonRecord::try_from(json!({"date_joined": "2011-11-01T12:30:07+00:00"}))
        .expect("Valid record");
    assert!(Predicate::icontains("date_joined", "30:07z").matches(&record).unwrap());
    assert!(!Predicate::icontains("date_joined", "+00:00").matches(&record).unwrap());
}
