//! View dispatch for datagrid views.
//!
//! A [`DatatableView`] answers one grid request: it shapes the view's base
//! collection, then either serializes the page as the grid's JSON payload or
//! hands it to a [`TemplateRenderer`] for a full page render. [`router`]
//! exposes views over HTTP with axum.

mod api;
mod config;
mod fixture;
mod template;
mod view;

pub use api::{ViewError, router, status_for};
pub use config::{DatagridServerConfig, ServerSettings, ViewConfig};
pub use fixture::{fixture_view, load_fixture};
pub use template::{HtmlTableRenderer, PageContext, PageRender, TemplateRenderer};
pub use view::{CollectionSource, DatatableView, ViewResponse};
