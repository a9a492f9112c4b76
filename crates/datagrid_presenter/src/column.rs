//! Per-column descriptors.

use crate::PresenterContext;
use datagrid_core::{FieldPath, Predicate};
use serde_json::Value;
use std::sync::Arc;

/// Renders one cell from a record and the per-request presenter context.
pub type RenderFn<R> = Arc<dyn Fn(&R, &PresenterContext) -> Value + Send + Sync>;

/// Turns a raw search string into a backend predicate.
///
/// Returning `None` (or an empty predicate) means the column contributes
/// nothing to the request's filter.
pub type FilterExpression = Arc<dyn Fn(&str) -> Option<Predicate> + Send + Sync>;

/// Where a column's cell values come from.
pub enum ColumnSource<R> {
    /// A rendering function bound to the column
    Bound(RenderFn<R>),
    /// A field path resolved on the record
    Path(FieldPath),
}

impl<R> Clone for ColumnSource<R> {
    fn clone(&self) -> Self {
        match self {
            ColumnSource::Bound(render) => ColumnSource::Bound(Arc::clone(render)),
            ColumnSource::Path(path) => ColumnSource::Path(path.clone()),
        }
    }
}

impl<R> std::fmt::Debug for ColumnSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnSource::Bound(_) => f.write_str("Bound(..)"),
            ColumnSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

/// Declaration of a single grid column.
///
/// # Examples
///
/// ```
/// use datagrid_core::{JsonRecord, Predicate};
/// use datagrid_presenter::ColumnDescriptor;
/// use serde_json::json;
///
/// let column = ColumnDescriptor::<JsonRecord>::bound("field_three", |_, _| json!("..."))
///     .with_filter(|value| Some(Predicate::icontains("last_name", value)))
///     .with_sort_key("last_name");
/// assert_eq!(column.identifier(), "field_three");
/// assert_eq!(column.sort_key(), Some("last_name"));
/// ```
pub struct ColumnDescriptor<R> {
    identifier: String,
    source: ColumnSource<R>,
    filter: Option<FilterExpression>,
    sort_key: Option<String>,
}

impl<R> ColumnDescriptor<R> {
    /// A column rendered by `render`.
    pub fn bound<F>(identifier: impl Into<String>, render: F) -> Self
    where
        F: Fn(&R, &PresenterContext) -> Value + Send + Sync + 'static,
    {
        Self::with_source(identifier, ColumnSource::Bound(Arc::new(render)))
    }

    /// A column whose identifier is also the field path to display.
    pub fn path(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let path = FieldPath::parse(&identifier);
        Self::with_source(identifier, ColumnSource::Path(path))
    }

    /// A column displaying `path` under a different identifier.
    pub fn path_as(identifier: impl Into<String>, path: impl Into<FieldPath>) -> Self {
        Self::with_source(identifier, ColumnSource::Path(path.into()))
    }

    /// A placeholder column that always renders an empty string.
    pub fn empty(identifier: impl Into<String>) -> Self {
        Self::bound(identifier, |_, _| Value::String(String::new()))
    }

    fn with_source(identifier: impl Into<String>, source: ColumnSource<R>) -> Self {
        Self {
            identifier: identifier.into(),
            source,
            filter: None,
            sort_key: None,
        }
    }

    /// Attach a custom filter expression.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> Option<Predicate> + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Sort by `key` (a backend field name, optionally `-`-prefixed) instead of the identifier.
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Column identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Cell source.
    pub fn source(&self) -> &ColumnSource<R> {
        &self.source
    }

    /// Custom filter expression, if declared.
    pub fn filter(&self) -> Option<&FilterExpression> {
        self.filter.as_ref()
    }

    /// Custom sort key, if declared.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            source: self.source.clone(),
            filter: self.filter.clone(),
            sort_key: self.sort_key.clone(),
        }
    }
}

impl<R> std::fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("identifier", &self.identifier)
            .field("source", &self.source)
            .field("filter", &self.filter.as_ref().map(|_| ".."))
            .field("sort_key", &self.sort_key)
            .finish()
    }
}
