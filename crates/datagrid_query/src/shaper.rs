//! Translation of grid parameters into ordering, filtering and paging.

use crate::{GridParams, ViewOptions};
use datagrid_core::{OrderKey, Page, Paginator, Predicate, Queryable, SortDirection};
use datagrid_error::{ColumnIndexError, DatagridResult, RequestError, RequestErrorKind};
use datagrid_presenter::ColumnPresenter;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Page number and size for the backend paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct PageRequest {
    /// 1-based page number
    number: usize,
    /// Records per page
    size: usize,
}

impl PageRequest {
    /// Reconcile the grid's offset addressing with page-number addressing.
    ///
    /// The page is `start / size + 1` (1 when `start` is 0). An offset that
    /// is not a multiple of `size` lands on the page containing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use datagrid_query::PageRequest;
    ///
    /// assert_eq!(*PageRequest::from_offset(0, 10).unwrap().number(), 1);
    /// assert_eq!(*PageRequest::from_offset(20, 10).unwrap().number(), 3);
    /// assert_eq!(*PageRequest::from_offset(25, 10).unwrap().number(), 3);
    /// assert!(PageRequest::from_offset(0, 0).is_err());
    /// assert!(PageRequest::from_offset(usize::MAX, 1).is_err());
    /// ```
    pub fn from_offset(start: usize, size: usize) -> Result<Self, RequestError> {
        if size == 0 {
            return Err(RequestError::new(RequestErrorKind::ZeroPageSize));
        }
        let number = start
            .checked_div(size)
            .and_then(|page| page.checked_add(1))
            .ok_or_else(|| RequestError::new(RequestErrorKind::OffsetOutOfRange { start, size }))?;
        Ok(Self { number, size })
    }
}

/// A collection with ordering and filtering applied, plus the page to fetch.
#[derive(Debug, Clone, Getters)]
pub struct ShapedCollection<Q> {
    /// The shaped collection
    collection: Q,
    /// Page to fetch from it
    page: PageRequest,
}

impl<Q: Queryable> ShapedCollection<Q> {
    /// Count the shaped collection and fetch the requested page.
    #[instrument(skip(self), fields(page = self.page.number, size = self.page.size))]
    pub fn paginate(&self) -> DatagridResult<Page<Q::Item>> {
        let paginator = Paginator::for_collection(&self.collection, self.page.size)?;
        paginator.page(&self.collection, self.page.number)
    }

    /// Take the collection out.
    pub fn into_collection(self) -> Q {
        self.collection
    }
}

/// Shapes a view's collection from grid request parameters.
///
/// # Examples
///
/// ```
/// use datagrid_core::{JsonRecord, OrderKey};
/// use datagrid_presenter::ColumnPresenter;
/// use datagrid_query::{GridParams, QueryShaper, ViewOptions};
///
/// let presenter = ColumnPresenter::<JsonRecord>::from_paths(["username", "last_name"]).unwrap();
/// let options = ViewOptions::builder().sorting_enabled(true).build().unwrap();
/// let shaper = QueryShaper::new(&presenter, &options);
///
/// let params = GridParams::from_pairs([
///     ("iSortingCols", "1"),
///     ("iSortCol_0", "1"),
///     ("sSortDir_0", "desc"),
///     ("bSortable_1", "true"),
/// ]);
/// assert_eq!(shaper.sort_keys(&params).unwrap(), vec![OrderKey::parse("-last_name")]);
/// ```
#[derive(Debug)]
pub struct QueryShaper<'a, R> {
    presenter: &'a ColumnPresenter<R>,
    options: &'a ViewOptions,
}

impl<'a, R> QueryShaper<'a, R> {
    /// Create a shaper for one view.
    pub fn new(presenter: &'a ColumnPresenter<R>, options: &'a ViewOptions) -> Self {
        Self { presenter, options }
    }

    /// Page number and size requested.
    pub fn page_request(&self, params: &GridParams) -> Result<PageRequest, RequestError> {
        let size = params.display_length(*self.options.per_page_default())?;
        let start = params.display_start()?;
        PageRequest::from_offset(start, size)
    }

    /// Ordering key for `column`: its custom sort key, else its identifier.
    pub fn column_sort_key(
        &self,
        column: usize,
        direction: SortDirection,
    ) -> Result<OrderKey, ColumnIndexError> {
        let identifier = self.presenter.column_name_at(column)?;
        let key = match self.presenter.sort_key(identifier) {
            Some(custom) => OrderKey::parse(custom),
            None => OrderKey::new(identifier, SortDirection::Asc),
        };
        Ok(match direction {
            SortDirection::Asc => key,
            SortDirection::Desc => key.reversed(),
        })
    }

    /// Ordering keys for every admitted sort slot, in slot order.
    ///
    /// A slot is admitted when the column it targets is flagged sortable.
    #[instrument(skip_all)]
    pub fn sort_keys(&self, params: &GridParams) -> DatagridResult<Vec<OrderKey>> {
        let slots = params.sorting_cols()?;
        let mut keys = Vec::with_capacity(slots);
        for slot in 0..slots {
            let column = params.sort_column(slot)?;
            if !params.is_sortable(column) {
                debug!(slot, column, "Skipping sort slot on unsortable column");
                continue;
            }
            keys.push(self.column_sort_key(column, params.sort_direction(slot))?);
        }
        debug!(keys = keys.len(), "Resolved sort keys");
        Ok(keys)
    }

    /// Predicate for searching `column` for `value`.
    ///
    /// Uses the column's filter expression when declared, else a
    /// case-insensitive substring match on the column identifier.
    pub fn column_predicate(
        &self,
        column: usize,
        value: &str,
    ) -> Result<Option<Predicate>, ColumnIndexError> {
        let identifier = self.presenter.column_name_at(column)?;
        Ok(match self.presenter.filter_expression(identifier) {
            Some(filter) => filter(value),
            None => Some(Predicate::icontains(identifier, value)),
        })
    }

    /// Conjunction of every searched, searchable column's predicate.
    ///
    /// Returns `None` when nothing constrains the collection.
    #[instrument(skip_all)]
    pub fn search_predicate(&self, params: &GridParams) -> DatagridResult<Option<Predicate>> {
        let columns = params.column_count()?;
        let mut combined: Option<Predicate> = None;
        for column in 0..columns {
            let value = params.search(column);
            if value.is_empty() || !params.is_searchable(column) {
                continue;
            }
            match self.column_predicate(column, value)? {
                Some(predicate) if !predicate.is_empty() => {
                    combined = Some(match combined {
                        Some(acc) => acc & predicate,
                        None => predicate,
                    });
                }
                _ => debug!(column, "Filter expression produced no predicate"),
            }
        }
        Ok(combined)
    }

    /// Apply ordering, then filtering, and resolve the page to fetch.
    ///
    /// When sorting is enabled the collection is always ordered, possibly by
    /// an empty key list. Filtering runs only for a non-empty predicate.
    #[instrument(
        skip_all,
        fields(
            sorting = *self.options.sorting_enabled(),
            filtering = *self.options.filtering_enabled()
        )
    )]
    pub fn shape<Q>(&self, collection: Q, params: &GridParams) -> DatagridResult<ShapedCollection<Q>>
    where
        Q: Queryable<Item = R>,
    {
        let mut collection = collection;

        if *self.options.sorting_enabled() {
            let keys = self.sort_keys(params)?;
            collection = collection.order_by(&keys)?;
        }

        if *self.options.filtering_enabled() {
            if let Some(predicate) = self.search_predicate(params)? {
                debug!(?predicate, "Applying search filter");
                collection = collection.filter(&predicate)?;
            }
        }

        let page = self.page_request(params)?;
        debug!(page = page.number, size = page.size, "Resolved page request");
        Ok(ShapedCollection { collection, page })
    }
}
