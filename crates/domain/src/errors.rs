//! Domain-level errors
//!
//! Resolution itself never fails; these errors only come from parsing
//! identifiers supplied from outside (CLI arguments, config files).

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Widget variant identifier not in the registry
    #[error("Unknown widget variant: {0}")]
    UnknownVariant(String),

    /// Time of day could not be parsed
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}
