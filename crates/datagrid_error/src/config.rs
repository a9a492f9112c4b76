//! Configuration error types.

use derive_more::{Display, Error};

/// Specific error conditions while loading views and their data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ConfigErrorKind {
    /// A configuration or fixture file could not be read.
    #[display("Failed to read {}: {}", path, reason)]
    Read {
        /// File that was requested
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// A configuration or fixture document is malformed.
    #[display("Failed to parse {}: {}", origin, reason)]
    Parse {
        /// File or document being parsed
        origin: String,
        /// Parser message
        reason: String,
    },

    /// A setting holds an unusable value.
    #[display("Invalid value for '{}': {}", key, reason)]
    InvalidValue {
        /// Setting name
        key: String,
        /// What is wrong with it
        reason: String,
    },

    /// Record data was not a JSON object.
    #[display("Expected a JSON object for a record, got: {}", _0)]
    NotAnObject(String),
}

impl ConfigErrorKind {
    /// An unusable value for `key`.
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigErrorKind::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use datagrid_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::invalid(
///     "per_page_default",
///     "must be greater than zero",
/// ));
/// assert!(matches!(err.kind, ConfigErrorKind::InvalidValue { .. }));
/// assert!(format!("{}", err).contains("per_page_default"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error kind.
    #[error(not(source))]
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
