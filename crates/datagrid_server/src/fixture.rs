//! Views backed by JSON fixture files.

use crate::{DatatableView, ViewConfig};
use datagrid_core::{JsonRecord, MemoryCollection};
use datagrid_error::{ConfigError, ConfigErrorKind, DatagridResult};
use datagrid_presenter::ColumnPresenter;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Load a JSON array of objects as an in-memory collection.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not a JSON array, or holds
/// something other than objects.
#[instrument(skip_all)]
pub fn load_fixture(path: impl AsRef<Path>) -> DatagridResult<MemoryCollection<JsonRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(ConfigErrorKind::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        ConfigError::new(ConfigErrorKind::Parse {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let Value::Array(items) = value else {
        return Err(ConfigError::new(ConfigErrorKind::invalid(
            "fixture",
            format!("{} must hold a JSON array", path.display()),
        ))
        .into());
    };

    let records = items
        .into_iter()
        .map(JsonRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    info!(path = %path.display(), records = records.len(), "Loaded fixture");
    Ok(MemoryCollection::new(records))
}

/// Build the view described by `config`, serving its fixture records.
///
/// A view without a fixture serves an empty collection.
pub fn fixture_view(config: &ViewConfig) -> DatagridResult<DatatableView<MemoryCollection<JsonRecord>>> {
    config.validate()?;
    let collection = match &config.fixture {
        Some(path) => load_fixture(path)?,
        None => MemoryCollection::default(),
    };
    let collection = Arc::new(collection);
    let presenter = ColumnPresenter::from_paths(config.columns.iter().cloned())?;

    Ok(DatatableView::new(&config.name, presenter, move || -> DatagridResult<_> {
        Ok(collection.as_ref().clone())
    })
    .with_route(config.route())
    .with_template_name(config.template_name())
    .with_options(config.options.clone()))
}
