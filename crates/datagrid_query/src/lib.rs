//! Query shaping for datagrid views.
//!
//! [`GridParams`] reads the grid's pagination, sort and search parameters.
//! [`QueryShaper`] turns them, together with a view's
//! [`ColumnPresenter`](datagrid_presenter::ColumnPresenter), into ordering,
//! filtering and paging applied to a [`Queryable`](datagrid_core::Queryable).

mod options;
mod params;
mod shaper;

pub use options::{ViewOptions, ViewOptionsBuilder};
pub use params::{GridParams, keys};
pub use shaper::{PageRequest, QueryShaper, ShapedCollection};
