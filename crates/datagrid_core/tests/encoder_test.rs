//! Tests for the standard JSON value encoder.

use chrono::{NaiveDate, TimeZone, Timelike, Utc};
use datagrid_core::{FieldValue, StandardEncoder, ValueEncoder};
use serde_json::{Value, json};

#[test]
fn test_encode_scalars() {
    let encoder = StandardEncoder;
    assert_eq!(encoder.encode(&FieldValue::Null), Value::Null);
    assert_eq!(encoder.encode(&FieldValue::from(true)), json!(true));
    assert_eq!(encoder.encode(&FieldValue::from(42)), json!(42));
    assert_eq!(encoder.encode(&FieldValue::from("x")), json!("x"));
}

#[test]
fn test_encode_non_finite_float_as_null() {
    assert_eq!(StandardEncoder.encode(&FieldValue::Float(f64::NAN)), Value::Null);
}

#[test]
fn test_encode_decimal_keeps_precision() {
    let value = FieldValue::Decimal("10.500".to_string());
    assert_eq!(StandardEncoder.encode(&value), json!("10.500"));
}

#[test]
fn test_encode_date() {
    let date = NaiveDate::from_ymd_opt(2011, 11, 1).expect("Valid date");
    assert_eq!(StandardEncoder.encode(&date.into()), json!("2011-11-01"));
}

#[test]
fn test_encode_datetime_truncates_to_milliseconds() {
    let dt = Utc
        .with_ymd_and_hms(2011, 11, 1, 12, 30, 0)
        .unwrap()
        .with_nanosecond(123_456_789)
        .unwrap();
    assert_eq!(
        StandardEncoder.encode(&FieldValue::DateTime(dt)),
        json!("2011-11-01T12:30:00.123Z")
    );
}

#[test]
fn test_datetime_text_matches_encoded_form() {
    let whole = Utc.with_ymd_and_hms(2011, 11, 1, 12, 30, 7).unwrap();
    let fractional = whole.with_nanosecond(250_000_000).unwrap();
    for dt in [whole, fractional] {
        let value = FieldValue::DateTime(dt);
        assert_eq!(StandardEncoder.encode(&value), Value::String(value.to_string()));
    }
    assert_eq!(FieldValue::DateTime(whole).to_string(), "2011-11-01T12:30:07Z");
}
