//! Request parameter error types.

use derive_more::{Display, Error};

/// Specific error conditions while reading grid request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum RequestErrorKind {
    /// A numeric parameter did not parse as an integer.
    #[display("Parameter '{}' is not a valid integer: '{}'", key, value)]
    InvalidInteger {
        /// Parameter key
        key: String,
        /// Raw value received
        value: String,
    },

    /// A page size of zero cannot address any page.
    #[display("Page size must be greater than zero")]
    ZeroPageSize,

    /// The requested offset addresses no representable page.
    #[display("Display start {} is out of range for page size {}", start, size)]
    OffsetOutOfRange {
        /// Offset of the first requested row
        start: usize,
        /// Requested page size
        size: usize,
    },
}

/// Request parameter error with location tracking.
///
/// # Examples
///
/// ```
/// use datagrid_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::InvalidInteger {
///     key: "iDisplayStart".into(),
///     value: "ten".into(),
/// });
/// assert!(format!("{}", err).contains("iDisplayStart"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The specific error kind.
    #[error(not(source))]
    pub kind: RequestErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl RequestError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
