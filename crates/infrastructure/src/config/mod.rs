//! Application configuration
//!
//! Split into focused sub-modules:
//! - `store`: preference store location
//! - `logging`: log filter and format
//! - `notification`: persistent notification toggle
//!
//! Sources, later ones winning: built-in defaults, `prism.toml` (or an
//! explicit file), then `PRISM__`-prefixed environment variables with `__`
//! between nesting levels (e.g. `PRISM__STORE__PATH`).

mod logging;
mod notification;
mod store;

use std::collections::HashSet;
use std::path::Path;

use application::error::ApplicationError;
use application::services::WidgetInstance;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::LoggingConfig;
pub use notification::NotificationConfig;
pub use store::StoreConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Default configuration file stem, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "prism";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preference store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Persistent notification configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Placed widget instances rendered by `render-all`
    #[serde(default)]
    pub widgets: Vec<WidgetInstance>,
}

impl AppConfig {
    /// Load configuration from `prism.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("store.path", "HomeWidgetPreferences.json")?
            .set_default("logging.filter", "info")?
            .add_source(file)
            // Override with environment variables (e.g., PRISM__LOGGING__JSON)
            .add_source(
                config::Environment::with_prefix("PRISM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            store = %config.store.path.display(),
            widgets = config.widgets.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field constraints the deserializer cannot express
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if two widget instances
    /// share an id or an id is blank.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            if widget.id.trim().is_empty() {
                return Err(ApplicationError::Configuration(format!(
                    "widget of variant {} has an empty id",
                    widget.variant
                )));
            }
            if !seen.insert(widget.id.as_str()) {
                return Err(ApplicationError::Configuration(format!(
                    "duplicate widget id: {}",
                    widget.id
                )));
            }
        }
        Ok(())
    }
}
