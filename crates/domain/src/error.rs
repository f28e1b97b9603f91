//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction, so loaders can
//! report bad source data without resorting to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_carries_reason() {
        let err = DomainError::invalid_id("Episode id cannot be empty");
        assert_eq!(err.to_string(), "Invalid ID format: Episode id cannot be empty");
    }
}
