//! The queryable collection contract.

use crate::{OrderKey, Predicate};
use datagrid_error::DatagridResult;

/// A collection the record store can filter, order, count and slice.
///
/// Shaping methods consume the collection and return the shaped one, so a
/// lazily evaluated backend can accumulate the query and run it on
/// [`Queryable::count`] or [`Queryable::window`].
pub trait Queryable: Sized {
    /// Record type produced by the collection.
    type Item;

    /// Keep only the records matching `predicate`.
    fn filter(self, predicate: &Predicate) -> DatagridResult<Self>;

    /// Order by `keys`, later keys breaking ties among earlier ones.
    ///
    /// An empty slice clears any ordering.
    fn order_by(self, keys: &[OrderKey]) -> DatagridResult<Self>;

    /// Number of records in the collection.
    fn count(&self) -> DatagridResult<usize>;

    /// Records `offset..offset + limit`, or all remaining when `limit` is `None`.
    fn window(&self, offset: usize, limit: Option<usize>) -> DatagridResult<Vec<Self::Item>>;
}
