//! Per-view shaping options.

use datagrid_error::{ConfigError, ConfigErrorKind};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Switches and defaults a view applies when shaping its collection.
///
/// # Examples
///
/// ```
/// use datagrid_query::ViewOptionsBuilder;
///
/// let options = ViewOptionsBuilder::default()
///     .filtering_enabled(true)
///     .per_page_default(5usize)
///     .build()
///     .unwrap();
/// assert!(*options.filtering_enabled());
/// assert!(!*options.sorting_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct ViewOptions {
    /// Apply per-column search parameters
    #[serde(default)]
    filtering_enabled: bool,
    /// Apply sort-slot parameters
    #[serde(default)]
    sorting_enabled: bool,
    /// Page size when the request carries none
    #[serde(default = "default_per_page")]
    per_page_default: usize,
}

impl ViewOptions {
    /// Returns a builder for constructing ViewOptions.
    pub fn builder() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page_default == 0 {
            return Err(ConfigError::new(ConfigErrorKind::invalid(
                "per_page_default",
                "must be greater than zero",
            )));
        }
        Ok(())
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            filtering_enabled: false,
            sorting_enabled: false,
            per_page_default: default_per_page(),
        }
    }
}

fn default_per_page() -> usize {
    10
}
