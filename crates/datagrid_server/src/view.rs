//! Per-request dispatch between the JSON payload and a page render.

use crate::{HtmlTableRenderer, PageContext, PageRender, TemplateRenderer};
use datagrid_core::{Queryable, Record};
use datagrid_error::DatagridResult;
use datagrid_presenter::ColumnPresenter;
use datagrid_query::{GridParams, QueryShaper, ViewOptions};
use datagrid_response::{DefaultHooks, GridResponse, ResponseHooks, ResponseSerializer};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Supplies a view's base collection, freshly for every request.
///
/// Any `Fn() -> DatagridResult<Q>` is a source.
pub trait CollectionSource<Q>: Send + Sync {
    /// The unshaped collection the view starts from.
    fn collection(&self) -> DatagridResult<Q>;
}

impl<Q, F> CollectionSource<Q> for F
where
    F: Fn() -> DatagridResult<Q> + Send + Sync,
{
    fn collection(&self) -> DatagridResult<Q> {
        self()
    }
}

/// Outcome of handling one request.
#[derive(Debug, Clone)]
pub enum ViewResponse {
    /// The grid payload
    Json(GridResponse),
    /// A full page render
    Page(PageRender),
}

/// A paginated list view backing one grid.
///
/// The presenter, options, hooks and renderer are fixed at construction and
/// shared read-only by every request.
///
/// # Examples
///
/// ```
/// use datagrid_core::{JsonRecord, MemoryCollection};
/// use datagrid_error::DatagridResult;
/// use datagrid_presenter::ColumnPresenter;
/// use datagrid_query::GridParams;
/// use datagrid_server::{DatatableView, ViewResponse};
/// use serde_json::json;
///
/// let users: MemoryCollection<JsonRecord> = (0..3)
///     .map(|i| JsonRecord::try_from(json!({"username": format!("user_{}", i)})).unwrap())
///     .collect();
/// let presenter = ColumnPresenter::from_paths(["username"]).unwrap();
/// let view = DatatableView::new("users", presenter, move || -> DatagridResult<_> {
///     Ok(users.clone())
/// });
///
/// let params = GridParams::from_pairs([("json", ""), ("sEcho", "1")]);
/// match view.handle(&params).unwrap() {
///     ViewResponse::Json(response) => assert_eq!(response.rows().len(), 3),
///     ViewResponse::Page(_) => unreachable!(),
/// }
/// ```
pub struct DatatableView<Q: Queryable> {
    name: String,
    route: String,
    template_name: String,
    presenter: Arc<ColumnPresenter<Q::Item>>,
    options: ViewOptions,
    source: Arc<dyn CollectionSource<Q>>,
    hooks: Arc<dyn ResponseHooks<Q::Item>>,
    renderer: Arc<dyn TemplateRenderer<Q::Item>>,
}

impl<Q> DatatableView<Q>
where
    Q: Queryable,
    Q::Item: Record + 'static,
{
    /// Create a view with default options, hooks and renderer.
    ///
    /// The route defaults to `/<name>/` and the template to
    /// `<name>/list.html`.
    pub fn new(
        name: impl Into<String>,
        presenter: impl Into<Arc<ColumnPresenter<Q::Item>>>,
        source: impl CollectionSource<Q> + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            route: format!("/{}/", name),
            template_name: format!("{}/list.html", name),
            name,
            presenter: presenter.into(),
            options: ViewOptions::default(),
            source: Arc::new(source),
            hooks: Arc::new(DefaultHooks),
            renderer: Arc::new(HtmlTableRenderer),
        }
    }

    /// Mount the view at `route`.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Render pages with `template_name`.
    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = template_name.into();
        self
    }

    /// Shape requests with `options`.
    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    /// Customize the JSON payload with `hooks`.
    pub fn with_hooks(mut self, hooks: impl ResponseHooks<Q::Item> + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Render pages with `renderer`.
    pub fn with_renderer(mut self, renderer: impl TemplateRenderer<Q::Item> + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// View name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route the view is mounted at.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Template used for page renders.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// The view's presenter.
    pub fn presenter(&self) -> &ColumnPresenter<Q::Item> {
        &self.presenter
    }

    /// The view's shaping options.
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Answer one request.
    ///
    /// The base collection is shaped and paginated for every request. When
    /// the parameters carry the `json` key the page is serialized as the
    /// grid payload, otherwise the view's template is rendered.
    ///
    /// # Errors
    ///
    /// Malformed parameters, out-of-range columns or pages, unresolvable
    /// fields and collaborator failures all propagate.
    #[instrument(skip_all, fields(view = %self.name, json = params.wants_json()))]
    pub fn handle(&self, params: &GridParams) -> DatagridResult<ViewResponse> {
        let collection = self.source.collection()?;
        let shaped = QueryShaper::new(&self.presenter, &self.options).shape(collection, params)?;
        let page = shaped.paginate()?;
        debug!(
            page = page.number(),
            rows = page.items().len(),
            count = page.count(),
            "Page fetched"
        );

        if params.wants_json() {
            let response =
                ResponseSerializer::new(&self.presenter, self.hooks.as_ref()).serialize(params, &page)?;
            info!(rows = response.rows().len(), "Serialized grid payload");
            return Ok(ViewResponse::Json(response));
        }

        let context = PageContext {
            records: page.items(),
            page_number: *page.number(),
            num_pages: *page.num_pages(),
            total_count: *page.count(),
            presenter: &self.presenter,
        };
        let body = self.renderer.render(&self.template_name, &context)?;
        info!(template = %self.template_name, "Rendered page");
        Ok(ViewResponse::Page(PageRender::new(&self.template_name, body)))
    }
}

impl<Q: Queryable> std::fmt::Debug for DatatableView<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatatableView")
            .field("name", &self.name)
            .field("route", &self.route)
            .field("template_name", &self.template_name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
