//! Error types for evaluator configuration
//!
//! Upstream failures from the operands are never wrapped here; they reach the
//! consumer as the caller's own error type.

use thiserror::Error;

/// Errors raised while building an evaluator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactiveBoolError {
    /// Unknown evaluation strategy name
    #[error("Invalid evaluation strategy: {0}")]
    InvalidStrategy(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for configuration operations
pub type ReactiveBoolResult<T> = Result<T, ReactiveBoolError>;

impl From<serde_json::Error> for ReactiveBoolError {
    fn from(err: serde_json::Error) -> Self {
        ReactiveBoolError::InvalidConfig(err.to_string())
    }
}
