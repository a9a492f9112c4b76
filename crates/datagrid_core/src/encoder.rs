//! JSON encoding of field values.

use crate::FieldValue;
use crate::value::format_datetime;
use serde_json::Value;

/// Converts field values into JSON.
///
/// The encoder is pluggable so views can choose how dates and decimals
/// appear on the wire.
pub trait ValueEncoder: Send + Sync {
    /// Encode one value.
    fn encode(&self, value: &FieldValue) -> Value;
}

/// Default encoding.
///
/// - dates as `YYYY-MM-DD`
/// - timestamps as ISO 8601 in UTC with a `Z` suffix, truncated to milliseconds
/// - decimals as strings, preserving precision
/// - non-finite floats as `null`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use datagrid_core::{FieldValue, StandardEncoder, ValueEncoder};
///
/// let joined = Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap();
/// let encoded = StandardEncoder.encode(&FieldValue::DateTime(joined));
/// assert_eq!(encoded, "2012-03-04T05:06:07Z");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEncoder;

impl ValueEncoder for StandardEncoder {
    fn encode(&self, value: &FieldValue) -> Value {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Float(x) => serde_json::Number::from_f64(*x)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Text(s) | FieldValue::Decimal(s) => Value::String(s.clone()),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(dt) => Value::String(format_datetime(dt)),
        }
    }
}
