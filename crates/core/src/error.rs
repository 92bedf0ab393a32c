//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and storage layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The message carried by `Validation` and `NotFound` is caller-facing.
/// `Storage` describes an internal fault and must never reach a client verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed a field-level check.
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The backing store is unusable (e.g. a poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
