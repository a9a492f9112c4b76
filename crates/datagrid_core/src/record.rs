//! Records and attribute lookup.

use crate::{FieldPath, FieldValue};
use datagrid_error::FieldNotDefinedError;

/// What a record exposes under an attribute name.
pub enum Attribute<'a> {
    /// A stored scalar
    Value(FieldValue),
    /// A related record reachable through this attribute
    Related(&'a dyn Record),
    /// A computed attribute, evaluated on demand
    Method(Box<dyn Fn() -> FieldValue + 'a>),
}

impl std::fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Attribute::Related(_) => f.write_str("Related(..)"),
            Attribute::Method(_) => f.write_str("Method(..)"),
        }
    }
}

/// A row in the record store, addressable by attribute name.
///
/// Implementors only provide [`Record::attribute`]; path traversal is shared.
pub trait Record {
    /// Look up a single attribute by name.
    fn attribute(&self, name: &str) -> Option<Attribute<'_>>;

    /// Resolve a dotted field path to a value.
    ///
    /// Every segment but the last must name a relation. A `Null` value in
    /// relation position is an unset relation and resolves to `Null`.
    /// Computed attributes are invoked.
    fn resolve(&self, path: &FieldPath) -> Result<FieldValue, FieldNotDefinedError>
    where
        Self: Sized,
    {
        resolve_path(self, path)
    }
}

/// Path resolution usable on trait objects.
pub(crate) fn resolve_path(
    record: &dyn Record,
    path: &FieldPath,
) -> Result<FieldValue, FieldNotDefinedError> {
    let segments = path.segments();
    let Some((last, hops)) = segments.split_last() else {
        return Err(FieldNotDefinedError::new(path.to_string()));
    };

    let mut current = record;
    for hop in hops {
        match current.attribute(hop) {
            Some(Attribute::Related(next)) => current = next,
            Some(Attribute::Value(FieldValue::Null)) => return Ok(FieldValue::Null),
            _ => return Err(FieldNotDefinedError::new(hop.clone())),
        }
    }

    match current.attribute(last) {
        Some(Attribute::Value(value)) => Ok(value),
        Some(Attribute::Method(method)) => Ok(method()),
        Some(Attribute::Related(_)) | None => Err(FieldNotDefinedError::new(last.clone())),
    }
}

impl dyn Record + '_ {
    /// Resolve a dotted field path on a record trait object.
    pub fn resolve_dyn(&self, path: &FieldPath) -> Result<FieldValue, FieldNotDefinedError> {
        resolve_path(self, path)
    }
}
