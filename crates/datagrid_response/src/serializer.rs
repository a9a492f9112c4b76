//! Rendering a page of records into the payload.

use crate::{GridResponse, ResponseHooks};
use datagrid_core::{Page, Queryable, Record};
use datagrid_error::DatagridResult;
use datagrid_presenter::ColumnPresenter;
use datagrid_query::{GridParams, ShapedCollection};
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Builds the grid payload for one view.
pub struct ResponseSerializer<'a, R> {
    presenter: &'a ColumnPresenter<R>,
    hooks: &'a dyn ResponseHooks<R>,
}

impl<'a, R: Record> ResponseSerializer<'a, R> {
    /// Create a serializer from a view's presenter and hooks.
    pub fn new(presenter: &'a ColumnPresenter<R>, hooks: &'a dyn ResponseHooks<R>) -> Self {
        Self { presenter, hooks }
    }

    /// Render one row per record, in page order.
    ///
    /// The presenter context is computed once and shared by every row. A
    /// field that cannot be resolved aborts the whole page.
    pub fn rows(&self, records: &[R]) -> DatagridResult<Vec<Vec<Value>>> {
        let context = self.hooks.presenter_context(records);
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let row = self.presenter.render_row(record, &context).map_err(|e| {
                error!(error = %e, "Row rendering failed");
                e
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Build the payload for an already fetched page.
    ///
    /// Both totals report the page's count of the shaped collection.
    #[instrument(skip_all, fields(page = page.number(), count = page.count()))]
    pub fn serialize(&self, params: &GridParams, page: &Page<R>) -> DatagridResult<GridResponse> {
        let records = page.items().as_slice();
        let rows = self.rows(records)?;
        debug!(rows = rows.len(), "Rows rendered");

        let initial = self.hooks.initial_json_context(records);
        let echo = params.echo()?;
        let response = GridResponse::new(echo, *page.count(), *page.count(), rows)
            .with_initial(initial);

        let extra = self.hooks.add_to_json_context(records, &response.base_json());
        Ok(response.with_extra(extra))
    }

    /// Paginate a shaped collection and build its payload.
    pub fn serialize_shaped<Q>(
        &self,
        params: &GridParams,
        shaped: &ShapedCollection<Q>,
    ) -> DatagridResult<GridResponse>
    where
        Q: Queryable<Item = R>,
    {
        let page = shaped.paginate()?;
        self.serialize(params, &page)
    }
}
