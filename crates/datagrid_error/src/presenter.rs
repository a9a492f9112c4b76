//! Column presenter construction errors.

use derive_more::{Display, Error};

/// Invalid column declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum PresenterErrorKind {
    /// Two columns share an identifier.
    #[display("Duplicate column identifier: {}", _0)]
    DuplicateColumn(String),

    /// A field-path column was declared with an empty path.
    #[display("Column '{}' has an empty field path", _0)]
    EmptyFieldPath(String),
}

/// Presenter error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Presenter Error: {} at line {} in {}", kind, line, file)]
pub struct PresenterError {
    /// The specific error kind.
    #[error(not(source))]
    pub kind: PresenterErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl PresenterError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PresenterErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
