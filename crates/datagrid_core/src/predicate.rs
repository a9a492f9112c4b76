//! Composable filter predicates.

use crate::record::resolve_path;
use crate::{FieldPath, FieldValue, Record};
use datagrid_error::FieldNotDefinedError;
use std::ops::{BitAnd, BitOr, Not};

/// A backend filter condition.
///
/// Predicates compose with `&`, `|` and `!`. An empty conjunction
/// ([`Predicate::empty`]) matches everything and counts as "no filter":
/// callers skip it rather than sending it to the backend.
///
/// # Examples
///
/// ```
/// use datagrid_core::{JsonRecord, Predicate};
/// use serde_json::json;
///
/// let user = JsonRecord::try_from(json!({"username": "user_3", "is_staff": false})).unwrap();
/// let predicate = Predicate::icontains("username", "_3") & Predicate::exact("is_staff", false);
/// assert!(predicate.matches(&user).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match on the field's text form
    IContains {
        /// Field to inspect
        field: FieldPath,
        /// Substring to look for
        needle: String,
    },
    /// Equality with a value
    Exact {
        /// Field to inspect
        field: FieldPath,
        /// Expected value
        value: FieldValue,
    },
    /// All of the inner predicates
    And(Vec<Predicate>),
    /// Any of the inner predicates
    Or(Vec<Predicate>),
    /// Negation
    Not(Box<Predicate>),
}

impl Predicate {
    /// The empty predicate: matches everything, filters nothing.
    pub fn empty() -> Self {
        Predicate::And(Vec::new())
    }

    /// Case-insensitive substring match.
    pub fn icontains(field: impl Into<FieldPath>, needle: impl Into<String>) -> Self {
        Predicate::IContains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Exact value match.
    pub fn exact(field: impl Into<FieldPath>, value: impl Into<FieldValue>) -> Self {
        Predicate::Exact {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this predicate constrains nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::And(inner) => inner.iter().all(Predicate::is_empty),
            _ => false,
        }
    }

    /// Conjoin with another predicate, flattening nested conjunctions.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (a, b) if b.is_empty() => a,
            (a, b) if a.is_empty() => b,
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), b) => {
                left.push(b);
                Predicate::And(left)
            }
            (a, Predicate::And(mut right)) => {
                right.insert(0, a);
                Predicate::And(right)
            }
            (a, b) => Predicate::And(vec![a, b]),
        }
    }

    /// Disjoin with another predicate.
    pub fn or(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::Or(mut left), b) => {
                left.push(b);
                Predicate::Or(left)
            }
            (a, b) => Predicate::Or(vec![a, b]),
        }
    }

    /// Evaluate against a record.
    pub fn matches(&self, record: &dyn Record) -> Result<bool, FieldNotDefinedError> {
        match self {
            Predicate::IContains { field, needle } => {
                let value = resolve_path(record, field)?;
                if value.is_null() {
                    return Ok(false);
                }
                Ok(value
                    .to_string()
                    .to_lowercase()
                    .contains(&needle.to_lowercase()))
            }
            Predicate::Exact { field, value } => {
                let actual = resolve_path(record, field)?;
                Ok(actual.compare(value).is_eq())
            }
            Predicate::And(inner) => {
                for predicate in inner {
                    if !predicate.matches(record)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::Or(inner) => {
                for predicate in inner {
                    if predicate.matches(record)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Predicate::Not(inner) => Ok(!inner.matches(record)?),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Predicate) -> Predicate {
        self.or(rhs)
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}
