//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the preference store
//! adapters, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LoggingConfig, NotificationConfig, StoreConfig};
pub use telemetry::{TelemetryError, init_logging};
