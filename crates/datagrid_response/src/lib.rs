//! Grid response serialization.
//!
//! [`ResponseSerializer`] renders one page of shaped records into the
//! [`GridResponse`] payload the grid expects. Views customize the payload
//! through [`ResponseHooks`].

mod hooks;
mod payload;
mod serializer;

pub use hooks::{DefaultHooks, ResponseHooks};
pub use payload::{GridResponse, fields};
pub use serializer::ResponseSerializer;
