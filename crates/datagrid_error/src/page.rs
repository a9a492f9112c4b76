//! Pagination error types.

use derive_more::{Display, Error};

/// Page numbers the paginator refuses to serve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum PageErrorKind {
    /// Page numbers start at one.
    #[display("Page number {} is less than 1", _0)]
    LessThanOne(usize),

    /// The page lies past the last page of results.
    #[display("Page {} contains no results ({} pages available)", number, num_pages)]
    Empty {
        /// Requested page number
        number: usize,
        /// Pages available for the current count
        num_pages: usize,
    },
}

/// Pagination error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Page Error: {} at line {} in {}", kind, line, file)]
pub struct PageError {
    /// The specific error kind.
    #[error(not(source))]
    pub kind: PageErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl PageError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PageErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
