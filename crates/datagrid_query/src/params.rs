//! Grid request parameters.

use datagrid_core::SortDirection;
use datagrid_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Query-string keys understood by the grid protocol.
///
/// Per-column and per-slot keys take a numeric suffix (`sSearch_0`).
pub mod keys {
    /// Opaque token echoed back in the response
    pub const ECHO: &str = "sEcho";
    /// Number of columns present in the request
    pub const COLUMNS: &str = "iColumns";
    /// Offset of the first row wanted
    pub const DISPLAY_START: &str = "iDisplayStart";
    /// Page size
    pub const DISPLAY_LENGTH: &str = "iDisplayLength";
    /// Per-column search string prefix
    pub const SEARCH: &str = "sSearch_";
    /// Per-column searchable flag prefix
    pub const SEARCHABLE: &str = "bSearchable_";
    /// Number of active sort slots
    pub const SORTING_COLS: &str = "iSortingCols";
    /// Per-slot target column prefix
    pub const SORT_COL: &str = "iSortCol_";
    /// Per-slot direction prefix
    pub const SORT_DIR: &str = "sSortDir_";
    /// Per-column sortable flag prefix
    pub const SORTABLE: &str = "bSortable_";
    /// Presence selects the JSON response
    pub const JSON: &str = "json";
}

/// The flat key/value parameters of one grid request.
///
/// Every accessor applies the protocol default when its key is absent.
/// Numeric parameters that are present but malformed are errors.
///
/// # Examples
///
/// ```
/// use datagrid_query::GridParams;
///
/// let params = GridParams::from_pairs([("json", ""), ("iDisplayStart", "20"), ("sSearch_0", "_3")]);
/// assert!(params.wants_json());
/// assert_eq!(params.display_start().unwrap(), 20);
/// assert_eq!(params.display_length(10).unwrap(), 10);
/// assert_eq!(params.search(0), "_3");
/// assert!(!params.is_searchable(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridParams {
    values: HashMap<String, String>,
}

impl GridParams {
    /// Wrap an already decoded parameter map.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Build from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the request asks for the JSON payload rather than a page render.
    pub fn wants_json(&self) -> bool {
        self.values.contains_key(keys::JSON)
    }

    /// Echo token, default 0.
    pub fn echo(&self) -> Result<i64, RequestError> {
        self.integer(keys::ECHO, 0)
    }

    /// Number of columns in this request, default 0.
    pub fn column_count(&self) -> Result<usize, RequestError> {
        self.integer(keys::COLUMNS, 0)
    }

    /// Offset of the first requested row, default 0.
    pub fn display_start(&self) -> Result<usize, RequestError> {
        self.integer(keys::DISPLAY_START, 0)
    }

    /// Requested page size, falling back to the view's default.
    pub fn display_length(&self, default: usize) -> Result<usize, RequestError> {
        self.integer(keys::DISPLAY_LENGTH, default)
    }

    /// Search string for `column`, empty when absent.
    pub fn search(&self, column: usize) -> &str {
        self.indexed(keys::SEARCH, column).unwrap_or("")
    }

    /// Whether `column` is flagged searchable (exactly `"true"`).
    pub fn is_searchable(&self, column: usize) -> bool {
        self.indexed(keys::SEARCHABLE, column) == Some("true")
    }

    /// Number of active sort slots, default 0.
    pub fn sorting_cols(&self) -> Result<usize, RequestError> {
        self.integer(keys::SORTING_COLS, 0)
    }

    /// Column index targeted by sort slot `slot`, default 0.
    pub fn sort_column(&self, slot: usize) -> Result<usize, RequestError> {
        self.integer(&format!("{}{}", keys::SORT_COL, slot), 0)
    }

    /// Direction of sort slot `slot`; anything but `"desc"` is ascending.
    pub fn sort_direction(&self, slot: usize) -> SortDirection {
        match self.indexed(keys::SORT_DIR, slot) {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// Whether `column` is flagged sortable (exactly `"true"`).
    ///
    /// Indexed by column, not by sort slot.
    pub fn is_sortable(&self, column: usize) -> bool {
        self.indexed(keys::SORTABLE, column) == Some("true")
    }

    fn indexed(&self, prefix: &str, index: usize) -> Option<&str> {
        self.get(&format!("{}{}", prefix, index))
    }

    fn integer<T: FromStr>(&self, key: &str, default: T) -> Result<T, RequestError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                RequestError::new(RequestErrorKind::InvalidInteger {
                    key: key.to_string(),
                    value: raw.to_string(),
                })
            }),
        }
    }
}

impl From<HashMap<String, String>> for GridParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K, V> FromIterator<(K, V)> for GridParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
