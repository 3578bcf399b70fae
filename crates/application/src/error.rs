//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Snapshot store could not be read
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Only store reads can succeed on a later attempt; resolution is
    /// deterministic.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::UnknownVariant("clock".into()).into();
        assert_eq!(err.to_string(), "Unknown widget variant: clock");
        assert!(!err.is_retryable());
    }

    #[test]
    fn store_errors_are_retryable() {
        let err = ApplicationError::Store("file locked".into());
        assert_eq!(err.to_string(), "Store error: file locked");
        assert!(err.is_retryable());
    }

    #[test]
    fn configuration_is_not_retryable() {
        assert!(!ApplicationError::Configuration("bad".into()).is_retryable());
    }
}
