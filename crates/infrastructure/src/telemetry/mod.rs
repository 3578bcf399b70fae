//! Logging infrastructure
//!
//! Structured `tracing` output for the CLI and any embedding host.

mod subscriber;

pub use subscriber::{TelemetryError, build_filter, init_logging};
