//! Validation errors raised while building domain values

use thiserror::Error;

/// Errors raised when input cannot become a valid domain value
///
/// Malformed input is always rejected, never coerced into a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input is malformed: unknown enum value, empty name, bad number, bad id
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Shorthand for building an [`DomainError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
