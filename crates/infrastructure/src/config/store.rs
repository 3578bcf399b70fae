//! Preference store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the cached preference dump lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON preference dump (default: HomeWidgetPreferences.json)
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("HomeWidgetPreferences.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}
