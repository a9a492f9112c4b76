//! HTTP surface for datagrid views.

use crate::{DatatableView, ViewResponse};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use datagrid_core::{Queryable, Record};
use datagrid_error::{DatagridError, DatagridErrorKind};
use datagrid_query::GridParams;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Creates a router serving `view` at its route.
///
/// GET requests carrying a `json` parameter receive the grid payload as
/// `application/json`; all others receive the rendered page as HTML.
pub fn router<Q>(view: Arc<DatatableView<Q>>) -> Router
where
    Q: Queryable + 'static,
    Q::Item: Record + 'static,
{
    let route = view.route().to_string();
    Router::new()
        .route(&route, get(serve_view::<Q>))
        .with_state(view)
}

/// Serve one grid request.
#[instrument(skip_all, fields(view = %view.name()))]
async fn serve_view<Q>(
    State(view): State<Arc<DatatableView<Q>>>,
    Query(params): Query<GridParams>,
) -> Result<Response, ViewError>
where
    Q: Queryable + 'static,
    Q::Item: Record + 'static,
{
    Ok(match view.handle(&params)? {
        ViewResponse::Json(response) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            response.to_body(),
        )
            .into_response(),
        ViewResponse::Page(page) => (StatusCode::OK, Html(page.into_body())).into_response(),
    })
}

/// HTTP status for a failed request.
///
/// Client mistakes in the grid parameters map to 400, pages past the end to
/// 404 and everything else to 500.
pub fn status_for(err: &DatagridError) -> StatusCode {
    match err.kind() {
        DatagridErrorKind::Request(_) | DatagridErrorKind::ColumnIndex(_) => StatusCode::BAD_REQUEST,
        DatagridErrorKind::Page(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A view failure rendered as an HTTP response.
#[derive(Debug)]
pub struct ViewError(DatagridError);

impl ViewError {
    /// The underlying error.
    pub fn error(&self) -> &DatagridError {
        &self.0
    }
}

impl From<DatagridError> for ViewError {
    fn from(err: DatagridError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!(error = %self.0, "View failed");
        } else {
            warn!(status = %status, error = %self.0, "Rejected grid request");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
