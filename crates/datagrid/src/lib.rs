//! Server-side adapter for DataTables-style paginated grids.
//!
//! A grid widget sends flat query parameters describing paging, per-column
//! search and multi-column sort. This crate turns them into operations on a
//! record collection and answers with the grid's JSON payload.
//!
//! - [`ColumnPresenter`] declares which columns a view shows and how each
//!   cell is rendered, searched and sorted.
//! - [`QueryShaper`] applies the request's ordering, filtering and paging to
//!   any [`Queryable`] collection.
//! - [`ResponseSerializer`] renders the page into the payload, with
//!   [`ResponseHooks`] for per-view extras.
//! - [`DatatableView`] dispatches between the payload and a full page
//!   render, and [`router`] serves views over HTTP.

pub use datagrid_core::*;
pub use datagrid_error::*;
pub use datagrid_presenter::*;
pub use datagrid_query::*;
pub use datagrid_response::*;
pub use datagrid_server::*;
