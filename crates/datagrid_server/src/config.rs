//! Server configuration for the datagrid-server binary.

use datagrid_error::{ConfigError, ConfigErrorKind, DatagridResult};
use datagrid_query::ViewOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level server configuration loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use datagrid_server::DatagridServerConfig;
///
/// let config = DatagridServerConfig::from_toml(r#"
///     [[views]]
///     name = "users"
///     columns = ["username", "team.name"]
///     sorting_enabled = true
/// "#).unwrap();
/// assert_eq!(config.server.bind_address, "127.0.0.1:8000");
/// assert_eq!(config.views[0].route(), "/users/");
/// assert!(*config.views[0].options.sorting_enabled());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatagridServerConfig {
    /// Server-level settings
    #[serde(default)]
    pub server: ServerSettings,
    /// Views to mount
    #[serde(default)]
    pub views: Vec<ViewConfig>,
}

impl DatagridServerConfig {
    /// Load and validate server configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, the TOML is invalid or a
    /// view fails validation.
    pub fn from_file(path: impl AsRef<Path>) -> DatagridResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;
        debug!(path = %path.display(), "Read configuration file");
        Self::from_toml(&contents)
    }

    /// Parse and validate server configuration from TOML text.
    pub fn from_toml(contents: &str) -> DatagridResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Parse {
                origin: "server configuration".to_string(),
                reason: e.to_string(),
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every view is usable and routes do not collide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut routes = HashSet::new();
        for view in &self.views {
            view.validate()?;
            if !routes.insert(view.route()) {
                return Err(ConfigError::new(ConfigErrorKind::invalid(
                    "route",
                    format!("{} is mounted more than once", view.route()),
                )));
            }
        }
        Ok(())
    }
}

/// Server-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

/// One view mounted by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name
    pub name: String,
    /// Route to mount at, `/<name>/` when omitted
    #[serde(default)]
    pub route: Option<String>,
    /// Template for page renders, `<name>/list.html` when omitted
    #[serde(default)]
    pub template_name: Option<String>,
    /// Field paths shown as columns, in order
    #[serde(default)]
    pub columns: Vec<String>,
    /// JSON file holding an array of records
    #[serde(default)]
    pub fixture: Option<PathBuf>,
    /// Shaping options
    #[serde(flatten)]
    pub options: ViewOptions,
}

impl ViewConfig {
    /// Route the view is mounted at.
    pub fn route(&self) -> String {
        self.route
            .clone()
            .unwrap_or_else(|| format!("/{}/", self.name))
    }

    /// Template used for page renders.
    pub fn template_name(&self) -> String {
        self.template_name
            .clone()
            .unwrap_or_else(|| format!("{}/list.html", self.name))
    }

    /// Check the view is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::invalid(
                "name",
                "view name must not be empty",
            )));
        }
        if !self.route().starts_with('/') {
            return Err(ConfigError::new(ConfigErrorKind::invalid(
                "route",
                format!("route for view {} must start with '/'", self.name),
            )));
        }
        if self.columns.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::invalid(
                "columns",
                format!("view {} declares no columns", self.name),
            )));
        }
        self.options.validate()
    }
}
