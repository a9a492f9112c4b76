//! Field resolution error types.

/// A field path segment that does not exist on a record.
///
/// # Examples
///
/// ```
/// use datagrid_error::FieldNotDefinedError;
///
/// let err = FieldNotDefinedError::new("nickname");
/// assert_eq!(err.field, "nickname");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Field Not Defined: '{}' at line {} in {}", field, line, file)]
pub struct FieldNotDefinedError {
    /// Name of the missing field
    pub field: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FieldNotDefinedError {
    /// Create a new FieldNotDefinedError for the given field at the current location.
    #[track_caller]
    pub fn new(field: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
