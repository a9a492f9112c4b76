//! Extension points around payload construction.

use datagrid_presenter::PresenterContext;
use serde_json::{Map, Value};

/// Per-view customization of the JSON payload.
///
/// Every hook receives the records of the current page and defaults to
/// contributing nothing.
///
/// # Examples
///
/// ```
/// use datagrid_core::JsonRecord;
/// use datagrid_response::ResponseHooks;
/// use serde_json::{Map, Value, json};
///
/// struct PageSize;
///
/// impl ResponseHooks<JsonRecord> for PageSize {
///     fn add_to_json_context(
///         &self,
///         records: &[JsonRecord],
///         _payload: &Map<String, Value>,
///     ) -> Map<String, Value> {
///         let mut extra = Map::new();
///         extra.insert("pageRows".to_string(), json!(records.len()));
///         extra
///     }
/// }
/// ```
pub trait ResponseHooks<R>: Send + Sync {
    /// Context computed once per request and handed to every row's renderers.
    fn presenter_context(&self, _records: &[R]) -> PresenterContext {
        PresenterContext::new()
    }

    /// Payload keys seeded before rows are rendered.
    ///
    /// The protocol keys overwrite any of these with the same name.
    fn initial_json_context(&self, _records: &[R]) -> Map<String, Value> {
        Map::new()
    }

    /// Payload keys added after rows are rendered.
    ///
    /// `payload` holds everything computed so far, rows included. Returned
    /// keys overwrite existing ones.
    fn add_to_json_context(&self, _records: &[R], _payload: &Map<String, Value>) -> Map<String, Value> {
        Map::new()
    }
}

/// Hooks that contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl<R> ResponseHooks<R> for DefaultHooks {}
