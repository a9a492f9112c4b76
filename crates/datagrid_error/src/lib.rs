//! Error types for the datagrid workspace.
//!
//! Every error records the source location where it was created, and all of
//! them convert into the aggregate [`DatagridError`].

mod column;
mod config;
mod error;
mod field;
mod page;
mod presenter;
mod request;
mod template;

pub use column::ColumnIndexError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{DatagridError, DatagridErrorKind, DatagridResult};
pub use field::FieldNotDefinedError;
pub use page::{PageError, PageErrorKind};
pub use presenter::{PresenterError, PresenterErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use template::TemplateError;
