//! Ordering keys.

use crate::FieldPath;
use serde::{Deserialize, Serialize};

/// Direction of a sort key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// One key of a multi-key ordering, written `field` or `-field`.
///
/// # Examples
///
/// ```
/// use datagrid_core::{OrderKey, SortDirection};
///
/// let key = OrderKey::parse("-date_joined");
/// assert_eq!(*key.direction(), SortDirection::Desc);
/// assert_eq!(key.reversed().to_string(), "date_joined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct OrderKey {
    /// Field to order by
    field: FieldPath,
    /// Direction
    direction: SortDirection,
}

impl OrderKey {
    /// Build a key from a field and direction.
    pub fn new(field: impl Into<FieldPath>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Parse the `-field` descending convention.
    pub fn parse(key: &str) -> Self {
        match key.strip_prefix('-') {
            Some(field) => Self::new(field, SortDirection::Desc),
            None => Self::new(key, SortDirection::Asc),
        }
    }

    /// The same field ordered the other way.
    pub fn reversed(self) -> Self {
        Self {
            field: self.field,
            direction: self.direction.reversed(),
        }
    }
}

impl std::fmt::Display for OrderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}", self.field),
            SortDirection::Desc => write!(f, "-{}", self.field),
        }
    }
}
