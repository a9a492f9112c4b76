//! Aggregate error type.

use crate::{
    ColumnIndexError, ConfigError, FieldNotDefinedError, PageError, PresenterError, RequestError,
    TemplateError,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum DatagridErrorKind {
    /// Column index outside the declared range
    ColumnIndex(ColumnIndexError),
    /// Field path missing on a record
    FieldNotDefined(FieldNotDefinedError),
    /// Malformed request parameter
    Request(RequestError),
    /// Page number rejected by the paginator
    Page(PageError),
    /// Invalid column declarations
    Presenter(PresenterError),
    /// Configuration error
    Config(ConfigError),
    /// Template rendering failed
    Template(TemplateError),
}

impl std::fmt::Display for DatagridErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatagridErrorKind::ColumnIndex(e) => write!(f, "{}", e),
            DatagridErrorKind::FieldNotDefined(e) => write!(f, "{}", e),
            DatagridErrorKind::Request(e) => write!(f, "{}", e),
            DatagridErrorKind::Page(e) => write!(f, "{}", e),
            DatagridErrorKind::Presenter(e) => write!(f, "{}", e),
            DatagridErrorKind::Config(e) => write!(f, "{}", e),
            DatagridErrorKind::Template(e) => write!(f, "{}", e),
        }
    }
}

/// Datagrid error with kind discrimination.
///
/// # Examples
///
/// ```
/// use datagrid_error::{ColumnIndexError, DatagridError, DatagridErrorKind};
///
/// let err: DatagridError = ColumnIndexError::new(7, 3).into();
/// assert!(matches!(err.kind(), DatagridErrorKind::ColumnIndex(_)));
/// ```
#[derive(Debug)]
pub struct DatagridError(Box<DatagridErrorKind>);

impl DatagridError {
    /// Create a new error from a kind.
    pub fn new(kind: DatagridErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DatagridErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DatagridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Datagrid Error: {}", self.0)
    }
}

impl std::error::Error for DatagridError {}

impl<T> From<T> for DatagridError
where
    T: Into<DatagridErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for datagrid operations.
pub type DatagridResult<T> = std::result::Result<T, DatagridError>;
