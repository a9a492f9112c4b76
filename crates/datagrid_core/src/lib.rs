//! Record store collaborator interfaces for the datagrid workspace.
//!
//! The adapter never talks to a concrete database. It shapes any
//! [`Queryable`] collection of [`Record`]s using composable [`Predicate`]s
//! and [`OrderKey`]s, then pages through it with a [`Paginator`].
//! [`MemoryCollection`] is a `Vec`-backed implementation used by tests and
//! the bundled server.

mod encoder;
mod json_record;
mod memory;
mod order;
mod paginator;
mod path;
mod predicate;
mod queryable;
mod record;
mod value;

pub use encoder::{StandardEncoder, ValueEncoder};
pub use json_record::JsonRecord;
pub use memory::MemoryCollection;
pub use order::{OrderKey, SortDirection};
pub use paginator::{Page, Paginator};
pub use path::FieldPath;
pub use predicate::Predicate;
pub use queryable::Queryable;
pub use record::{Attribute, Record};
pub use value::FieldValue;
