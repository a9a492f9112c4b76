//! In-memory record store.

use crate::{FieldValue, OrderKey, Predicate, Queryable, Record, SortDirection};
use datagrid_error::DatagridResult;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// A `Vec`-backed [`Queryable`].
///
/// Filtering and ordering are applied eagerly. Clearing the ordering with an
/// empty key list keeps the current order.
///
/// # Examples
///
/// ```
/// use datagrid_core::{JsonRecord, MemoryCollection, OrderKey, Queryable};
/// use serde_json::json;
///
/// let users = MemoryCollection::new(vec![
///     JsonRecord::try_from(json!({"username": "b"})).unwrap(),
///     JsonRecord::try_from(json!({"username": "a"})).unwrap(),
/// ]);
/// let sorted = users.order_by(&[OrderKey::parse("username")]).unwrap();
/// assert_eq!(sorted.count().unwrap(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection<R> {
    records: Vec<R>,
}

impl<R> MemoryCollection<R> {
    /// Wrap a list of records.
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Records in their current order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Unwrap into the underlying list.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> FromIterator<R> for MemoryCollection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> Queryable for MemoryCollection<R>
where
    R: Record + Clone,
{
    type Item = R;

    #[instrument(skip_all, fields(records = self.records.len()))]
    fn filter(self, predicate: &Predicate) -> DatagridResult<Self> {
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records {
            if predicate.matches(&record)? {
                kept.push(record);
            }
        }
        debug!(kept = kept.len(), "Filter applied");
        Ok(Self { records: kept })
    }

    #[instrument(skip_all, fields(records = self.records.len(), keys = keys.len()))]
    fn order_by(self, keys: &[OrderKey]) -> DatagridResult<Self> {
        if keys.is_empty() {
            return Ok(self);
        }

        let mut keyed = Vec::with_capacity(self.records.len());
        for record in self.records {
            let values = keys
                .iter()
                .map(|key| record.resolve(key.field()))
                .collect::<Result<Vec<FieldValue>, _>>()?;
            keyed.push((values, record));
        }

        keyed.sort_by(|(a, _), (b, _)| compare_keys(keys, a, b));
        Ok(Self {
            records: keyed.into_iter().map(|(_, record)| record).collect(),
        })
    }

    fn count(&self) -> DatagridResult<usize> {
        Ok(self.records.len())
    }

    fn window(&self, offset: usize, limit: Option<usize>) -> DatagridResult<Vec<R>> {
        let remaining = self.records.iter().skip(offset);
        let page = match limit {
            Some(limit) => remaining.take(limit).cloned().collect(),
            None => remaining.cloned().collect(),
        };
        Ok(page)
    }
}

fn compare_keys(keys: &[OrderKey], a: &[FieldValue], b: &[FieldValue]) -> Ordering {
    for ((key, left), right) in keys.iter().zip(a).zip(b) {
        let ordering = match key.direction() {
            SortDirection::Asc => left.compare(right),
            SortDirection::Desc => right.compare(left),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
