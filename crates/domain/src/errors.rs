//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidInjectionRate;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Injection rate outside of `[0.0, 1.0]`
    #[error(transparent)]
    InvalidInjectionRate(#[from] InvalidInjectionRate),

    /// A context item could not be converted to or from its stored form
    #[error("Invalid context item '{key}': {message}")]
    InvalidContextItem { key: String, message: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid context item error
    pub fn invalid_context_item(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidContextItem {
            key: key.into(),
            message: message.into(),
        }
    }
}
