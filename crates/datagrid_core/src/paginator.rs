//! Page-number pagination over a queryable.

use crate::Queryable;
use datagrid_error::{DatagridResult, PageError, PageErrorKind};
use derive_getters::Getters;
use tracing::instrument;

/// Splits a counted collection into fixed-size, 1-based pages.
///
/// The first page always exists, even for an empty collection.
///
/// # Examples
///
/// ```
/// use datagrid_core::Paginator;
///
/// let paginator = Paginator::new(11, 5);
/// assert_eq!(paginator.num_pages(), 3);
/// assert!(paginator.validate_number(4).is_err());
/// assert_eq!(Paginator::new(0, 5).num_pages(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Paginator {
    /// Total records in the collection
    count: usize,
    /// Records per page (never zero)
    per_page: usize,
}

impl Paginator {
    /// Create a paginator for `count` records. A zero page size is treated as one.
    pub fn new(count: usize, per_page: usize) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    /// Count the collection and build a paginator for it.
    pub fn for_collection<Q: Queryable>(collection: &Q, per_page: usize) -> DatagridResult<Self> {
        Ok(Self::new(collection.count()?, per_page))
    }

    /// Number of pages, at least one.
    pub fn num_pages(&self) -> usize {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// Check that `number` addresses an existing page.
    pub fn validate_number(&self, number: usize) -> Result<usize, PageError> {
        if number < 1 {
            return Err(PageError::new(PageErrorKind::LessThanOne(number)));
        }
        let num_pages = self.num_pages();
        if number > num_pages {
            return Err(PageError::new(PageErrorKind::Empty { number, num_pages }));
        }
        Ok(number)
    }

    /// Fetch page `number` from the collection.
    #[instrument(skip(self, collection), fields(count = self.count, per_page = self.per_page))]
    pub fn page<Q: Queryable>(&self, collection: &Q, number: usize) -> DatagridResult<Page<Q::Item>> {
        let number = self.validate_number(number)?;
        let offset = (number - 1) * self.per_page;
        let items = collection.window(offset, Some(self.per_page))?;
        Ok(Page {
            number,
            num_pages: self.num_pages(),
            count: self.count,
            items,
        })
    }
}

/// One page of records together with the paginator's totals.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Page<T> {
    /// 1-based page number
    number: usize,
    /// Pages available
    num_pages: usize,
    /// Records across all pages
    count: usize,
    /// Records on this page
    items: Vec<T>,
}

impl<T> Page<T> {
    /// Take the records out of the page.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}
