//! Records backed by JSON objects.

use crate::{Attribute, FieldValue, Record};
use chrono::{DateTime, NaiveDate, Utc};
use datagrid_error::{ConfigError, ConfigErrorKind};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A record read from a JSON object.
///
/// Nested objects become relations. Strings holding an RFC 3339 timestamp
/// or a `YYYY-MM-DD` date are read as timestamps and dates; arrays are kept
/// as their JSON text.
///
/// # Examples
///
/// ```
/// use datagrid_core::{FieldPath, FieldValue, JsonRecord, Record};
/// use serde_json::json;
///
/// let user = JsonRecord::try_from(json!({"profile": {"city": "Lyon"}})).unwrap();
/// let city = user.resolve(&FieldPath::parse("profile.city")).unwrap();
/// assert_eq!(city, FieldValue::from("Lyon"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonRecord {
    fields: BTreeMap<String, JsonField>,
}

#[derive(Debug, Clone, PartialEq)]
enum JsonField {
    Scalar(FieldValue),
    Nested(JsonRecord),
}

impl JsonRecord {
    /// Build a record from a JSON object map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(name, value)| (name, JsonField::from_value(value)))
            .collect();
        Self { fields }
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl JsonField {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => JsonField::Nested(JsonRecord::from_map(map)),
            other => JsonField::Scalar(scalar(other)),
        }
    }
}

fn scalar(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Int(i),
            None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
        },
        Value::String(s) => text(s),
        array @ Value::Array(_) => FieldValue::Text(array.to_string()),
        // Objects are relations and never reach here.
        Value::Object(_) => FieldValue::Null,
    }
}

fn text(s: String) -> FieldValue {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return FieldValue::DateTime(dt.with_timezone(&Utc));
    }
    if s.len() == 10 {
        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return FieldValue::Date(date);
        }
    }
    FieldValue::Text(s)
}

impl Record for JsonRecord {
    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        self.fields.get(name).map(|field| match field {
            JsonField::Scalar(value) => Attribute::Value(value.clone()),
            JsonField::Nested(record) => Attribute::Related(record),
        })
    }
}

impl TryFrom<Value> for JsonRecord {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConfigError::new(ConfigErrorKind::NotAnObject(
                other.to_string(),
            ))),
        }
    }
}
