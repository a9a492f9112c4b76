//! The column presenter.

use crate::{ColumnDescriptor, ColumnSource, FilterExpression};
use datagrid_core::{FieldPath, Record, StandardEncoder, ValueEncoder};
use datagrid_error::{
    ColumnIndexError, FieldNotDefinedError, PresenterError, PresenterErrorKind,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{instrument, trace};

/// Values computed once per request and shared by every rendered row.
pub type PresenterContext = Map<String, Value>;

/// The ordered set of columns a view exposes.
///
/// Declaration order is the column index order seen by the grid: index 0 is
/// the first declared column. A presenter is built once per view and shared
/// read-only by every request.
///
/// # Examples
///
/// ```
/// use datagrid_core::JsonRecord;
/// use datagrid_presenter::{ColumnDescriptor, ColumnPresenter, PresenterContext};
/// use serde_json::json;
///
/// let presenter = ColumnPresenter::new(vec![
///     ColumnDescriptor::path("username"),
///     ColumnDescriptor::bound("greeting", |user: &JsonRecord, _| json!("hi")),
/// ])
/// .unwrap();
///
/// let user = JsonRecord::try_from(json!({"username": "user_0"})).unwrap();
/// let row = presenter.render_row(&user, &PresenterContext::new()).unwrap();
/// assert_eq!(row, vec![json!("user_0"), json!("hi")]);
/// assert!(presenter.column_name_at(2).is_err());
/// ```
pub struct ColumnPresenter<R> {
    columns: Vec<ColumnDescriptor<R>>,
    positions: HashMap<String, usize>,
    encoder: Arc<dyn ValueEncoder>,
    options: Map<String, Value>,
}

impl<R> ColumnPresenter<R> {
    /// Build a presenter from column declarations.
    ///
    /// # Errors
    ///
    /// Fails if two columns share an identifier or a path column is empty.
    pub fn new(columns: Vec<ColumnDescriptor<R>>) -> Result<Self, PresenterError> {
        let mut positions = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if let ColumnSource::Path(path) = column.source() {
                if path.is_empty() {
                    return Err(PresenterError::new(PresenterErrorKind::EmptyFieldPath(
                        column.identifier().to_string(),
                    )));
                }
            }
            if positions
                .insert(column.identifier().to_string(), index)
                .is_some()
            {
                return Err(PresenterError::new(PresenterErrorKind::DuplicateColumn(
                    column.identifier().to_string(),
                )));
            }
        }

        Ok(Self {
            columns,
            positions,
            encoder: Arc::new(StandardEncoder),
            options: Map::new(),
        })
    }

    /// Build a presenter whose columns are all plain field paths.
    pub fn from_paths<I, S>(paths: I) -> Result<Self, PresenterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths.into_iter().map(|path| ColumnDescriptor::path(path)).collect())
    }

    /// Use `encoder` for values produced by field-path columns.
    pub fn with_encoder(mut self, encoder: impl ValueEncoder + 'static) -> Self {
        self.encoder = Arc::new(encoder);
        self
    }

    /// Attach a free-form presenter option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up a presenter option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Number of declared columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Identifier of the column at `index`.
    pub fn column_name_at(&self, index: usize) -> Result<&str, ColumnIndexError> {
        self.columns
            .get(index)
            .map(ColumnDescriptor::identifier)
            .ok_or_else(|| ColumnIndexError::new(index, self.columns.len()))
    }

    /// Column identifiers in declaration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(ColumnDescriptor::identifier)
    }

    /// Declared columns in order.
    pub fn columns(&self) -> &[ColumnDescriptor<R>] {
        &self.columns
    }

    /// The column declared under `identifier`.
    pub fn column(&self, identifier: &str) -> Option<&ColumnDescriptor<R>> {
        self.positions
            .get(identifier)
            .and_then(|index| self.columns.get(*index))
    }

    /// Custom filter expression for `identifier`, if any.
    pub fn filter_expression(&self, identifier: &str) -> Option<&FilterExpression> {
        self.column(identifier).and_then(ColumnDescriptor::filter)
    }

    /// Custom sort key for `identifier`, if any.
    pub fn sort_key(&self, identifier: &str) -> Option<&str> {
        self.column(identifier).and_then(ColumnDescriptor::sort_key)
    }
}

impl<R: Record> ColumnPresenter<R> {
    /// Render one cell.
    ///
    /// Identifiers without a bound renderer, including undeclared ones, are
    /// resolved as field paths on the record.
    pub fn render(
        &self,
        identifier: &str,
        record: &R,
        context: &PresenterContext,
    ) -> Result<Value, FieldNotDefinedError> {
        match self.column(identifier).map(ColumnDescriptor::source) {
            Some(ColumnSource::Bound(render)) => Ok(render(record, context)),
            Some(ColumnSource::Path(path)) => self.render_path(path, record),
            None => self.render_path(&FieldPath::parse(identifier), record),
        }
    }

    /// Render every declared column for one record, in declaration order.
    #[instrument(level = "trace", skip_all, fields(columns = self.columns.len()))]
    pub fn render_row(
        &self,
        record: &R,
        context: &PresenterContext,
    ) -> Result<Vec<Value>, FieldNotDefinedError> {
        self.columns
            .iter()
            .map(|column| self.render(column.identifier(), record, context))
            .collect()
    }

    fn render_path(&self, path: &FieldPath, record: &R) -> Result<Value, FieldNotDefinedError> {
        let value = record.resolve(path)?;
        trace!(path = %path, "Resolved field path");
        Ok(self.encoder.encode(&value))
    }
}

impl<R> Clone for ColumnPresenter<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            positions: self.positions.clone(),
            encoder: Arc::clone(&self.encoder),
            options: self.options.clone(),
        }
    }
}

impl<R> std::fmt::Debug for ColumnPresenter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnPresenter")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
