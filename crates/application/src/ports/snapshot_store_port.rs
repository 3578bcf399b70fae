//! Snapshot store port
//!
//! Read-only access to the cached weather/AQI state that the app writes
//! into its shared preference store.

use async_trait::async_trait;
use domain::WeatherSnapshot;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reading the current weather snapshot
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SnapshotStorePort: Send + Sync {
    /// Read a point-in-time snapshot
    ///
    /// Missing keys are not an error; they come back as `None` fields.
    async fn load_snapshot(&self) -> Result<WeatherSnapshot, ApplicationError>;

    /// Short description of the backing store, for logs
    fn describe(&self) -> String;
}
