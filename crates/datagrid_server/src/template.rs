//! Full-page rendering for non-JSON requests.

use datagrid_core::Record;
use datagrid_error::DatagridResult;
use datagrid_presenter::{ColumnPresenter, PresenterContext};
use derive_getters::Getters;
use serde_json::Value;

/// Everything a template sees when rendering one page of a view.
pub struct PageContext<'a, R> {
    /// Records on the current page, in order
    pub records: &'a [R],
    /// 1-based number of the current page
    pub page_number: usize,
    /// Number of pages in the shaped collection
    pub num_pages: usize,
    /// Records in the shaped collection
    pub total_count: usize,
    /// The view's presenter, for rendering cells
    pub presenter: &'a ColumnPresenter<R>,
}

/// A rendered page and the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PageRender {
    /// Template name the view was configured with
    template_name: String,
    /// Rendered document
    body: String,
}

impl PageRender {
    /// Pair a rendered body with its template name.
    pub fn new(template_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            body: body.into(),
        }
    }

    /// Take the rendered body.
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Renders a named template with a page context.
///
/// Any `Fn(&str, &PageContext<R>) -> DatagridResult<String>` is a renderer.
pub trait TemplateRenderer<R>: Send + Sync {
    /// Render `template_name` for one page.
    fn render(&self, template_name: &str, context: &PageContext<'_, R>) -> DatagridResult<String>;
}

impl<R, F> TemplateRenderer<R> for F
where
    F: Fn(&str, &PageContext<'_, R>) -> DatagridResult<String> + Send + Sync,
{
    fn render(&self, template_name: &str, context: &PageContext<'_, R>) -> DatagridResult<String> {
        self(template_name, context)
    }
}

/// Renders the page as a bare HTML table of the presenter's columns.
///
/// Used when a view has no template engine attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTableRenderer;

impl<R: Record> TemplateRenderer<R> for HtmlTableRenderer {
    fn render(&self, template_name: &str, context: &PageContext<'_, R>) -> DatagridResult<String> {
        let cells = PresenterContext::new();
        let mut html = String::new();
        html.push_str(&format!(
            "<table data-template=\"{}\" data-page=\"{}\" data-pages=\"{}\" data-count=\"{}\">",
            escape(template_name),
            context.page_number,
            context.num_pages,
            context.total_count
        ));

        html.push_str("<thead><tr>");
        for identifier in context.presenter.identifiers() {
            html.push_str(&format!("<th>{}</th>", escape(identifier)));
        }
        html.push_str("</tr></thead><tbody>");

        for record in context.records {
            html.push_str("<tr>");
            for value in context.presenter.render_row(record, &cells)? {
                html.push_str(&format!("<td>{}</td>", escape(&cell_text(&value))));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        Ok(html)
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
