//! Column presenters for datagrid views.
//!
//! A [`ColumnPresenter`] declares, in order, the columns a grid shows and
//! how each one is rendered, filtered and sorted.

mod column;
mod presenter;

pub use column::{ColumnDescriptor, ColumnSource, FilterExpression, RenderFn};
pub use presenter::{ColumnPresenter, PresenterContext};
