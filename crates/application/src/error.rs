//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors raised by the fault injection machinery itself
///
/// Errors from the wrapped action never pass through this type; callers
/// convert these into their own error type via `From<FaultError>`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FaultError {
    /// The cancellation token fired before the wrapped action could run
    #[error("Operation cancelled")]
    Cancelled,

    /// A provider failed while producing its value
    #[error("Provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },

    /// A required provider was not supplied when building a policy
    #[error("Missing provider: {0}")]
    MissingProvider(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FaultError {
    /// Create a provider failure
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Check if this error signals cancellation
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<DomainError> for FaultError {
    fn from(err: DomainError) -> Self {
        Self::Configuration(err.to_string())
    }
}
