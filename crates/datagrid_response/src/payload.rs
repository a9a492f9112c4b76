//! The grid's JSON payload.

use derive_getters::Getters;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Payload keys defined by the grid protocol.
pub mod fields {
    /// Echo token
    pub const ECHO: &str = "sEcho";
    /// Total record count
    pub const TOTAL_RECORDS: &str = "iTotalRecords";
    /// Record count after filtering
    pub const TOTAL_DISPLAY_RECORDS: &str = "iTotalDisplayRecords";
    /// Row data
    pub const ROWS: &str = "aaData";
}

/// One request's response payload.
///
/// Holds the four protocol fields plus keys contributed by view hooks.
/// [`GridResponse::to_json`] lays them out with hook-seeded keys first,
/// then protocol keys, then keys added after rendering; later keys win.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GridResponse {
    /// Echo token from the request
    echo: i64,
    /// Records in the shaped collection
    total_records: usize,
    /// Records after filtering
    total_display_records: usize,
    /// One array of rendered cells per record
    rows: Vec<Vec<Value>>,
    /// Keys seeded before rendering
    initial: Map<String, Value>,
    /// Keys added after rendering
    extra: Map<String, Value>,
}

impl GridResponse {
    /// Assemble a payload.
    pub fn new(
        echo: i64,
        total_records: usize,
        total_display_records: usize,
        rows: Vec<Vec<Value>>,
    ) -> Self {
        Self {
            echo,
            total_records,
            total_display_records,
            rows,
            initial: Map::new(),
            extra: Map::new(),
        }
    }

    /// Seed keys that protocol fields override.
    pub fn with_initial(mut self, initial: Map<String, Value>) -> Self {
        self.initial = initial;
        self
    }

    /// Add keys that override everything else.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Payload without the post-render keys.
    pub fn base_json(&self) -> Map<String, Value> {
        let mut payload = self.initial.clone();
        payload.insert(fields::ECHO.to_string(), Value::from(self.echo));
        payload.insert(
            fields::TOTAL_RECORDS.to_string(),
            Value::from(self.total_records),
        );
        payload.insert(
            fields::TOTAL_DISPLAY_RECORDS.to_string(),
            Value::from(self.total_display_records),
        );
        payload.insert(
            fields::ROWS.to_string(),
            Value::Array(self.rows.iter().cloned().map(Value::Array).collect()),
        );
        payload
    }

    /// The full payload.
    pub fn to_json(&self) -> Value {
        let mut payload = self.base_json();
        payload.extend(self.extra.clone());
        Value::Object(payload)
    }

    /// The full payload as a JSON string.
    pub fn to_body(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for GridResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
