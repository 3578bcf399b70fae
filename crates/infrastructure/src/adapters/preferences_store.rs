//! Preference store adapters - Implement SnapshotStorePort
//!
//! `JsonPreferencesStore` reads a JSON dump of the shared preference store
//! (a flat object of key to value) on every call. `InMemoryPreferencesStore`
//! holds a map directly, for tests and for embedding the engine behind a
//! different persistence layer.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SnapshotStorePort;
use async_trait::async_trait;
use domain::WeatherSnapshot;
use tracing::{debug, instrument, warn};

use super::preference_keys::{PreferenceMap, snapshot_from_preferences};

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct JsonPreferencesStore {
    path: PathBuf,
}

impl JsonPreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the raw key-value map
    ///
    /// A missing file means the app has not written anything yet and reads
    /// as an empty store.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Store` if the file exists but cannot be
    /// read or is not a JSON object.
    pub async fn load_preferences(&self) -> Result<PreferenceMap, ApplicationError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Preference store not found, using empty store");
                return Ok(PreferenceMap::new());
            },
            Err(e) => {
                return Err(ApplicationError::Store(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            },
        };

        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::Store(format!("malformed store {}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl SnapshotStorePort for JsonPreferencesStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_snapshot(&self) -> Result<WeatherSnapshot, ApplicationError> {
        let prefs = self.load_preferences().await?;
        debug!(keys = prefs.len(), "Loaded preference store");
        Ok(snapshot_from_preferences(&prefs))
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Preference store held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferencesStore {
    prefs: PreferenceMap,
}

impl InMemoryPreferencesStore {
    pub const fn new(prefs: PreferenceMap) -> Self {
        Self { prefs }
    }
}

#[async_trait]
impl SnapshotStorePort for InMemoryPreferencesStore {
    async fn load_snapshot(&self) -> Result<WeatherSnapshot, ApplicationError> {
        Ok(snapshot_from_preferences(&self.prefs))
    }

    fn describe(&self) -> String {
        format!("memory:{} keys", self.prefs.len())
    }
}
