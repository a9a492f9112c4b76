//! Dotted field paths.

use serde::{Deserialize, Serialize};

/// A dotted path naming a field, possibly through relations (`author.name`).
///
/// # Examples
///
/// ```
/// use datagrid_core::FieldPath;
///
/// let path = FieldPath::parse("profile.city");
/// assert_eq!(path.segments(), ["profile", "city"]);
/// assert_eq!(path.to_string(), "profile.city");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Split a dotted path into its segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Path segments in traversal order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the path names nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(String::is_empty)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}
