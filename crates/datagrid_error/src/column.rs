//! Column index error types.

/// A column index outside the presenter's declared range.
///
/// # Examples
///
/// ```
/// use datagrid_error::ColumnIndexError;
///
/// let err = ColumnIndexError::new(4, 3);
/// assert_eq!(err.index, 4);
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Column Index Error: column {} out of range for {} declared columns at line {} in {}",
    index,
    column_count,
    line,
    file
)]
pub struct ColumnIndexError {
    /// The requested index
    pub index: usize,
    /// Number of columns the presenter declares
    pub column_count: usize,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ColumnIndexError {
    /// Create a new ColumnIndexError at the current location.
    #[track_caller]
    pub fn new(index: usize, column_count: usize) -> Self {
        let location = std::panic::Location::caller();
        Self {
            index,
            column_count,
            line: location.line(),
            file: location.file(),
        }
    }
}
