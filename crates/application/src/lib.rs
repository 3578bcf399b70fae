//! Application layer - Use cases and orchestration
//!
//! Defines the snapshot store port and the render service that reads one
//! point-in-time snapshot and resolves widget instances against it.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
