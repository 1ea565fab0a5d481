//! Domain error model.

use thiserror::Error;

use crate::validation::FieldViolations;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation. The violations carry the field
    /// path and a human-readable message; they are never silently dropped.
    #[error("validation failed: {0}")]
    Validation(FieldViolations),

    /// A domain invariant was violated (e.g. duplicate record id).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A mutation targeted a record id absent from the store.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(violations: FieldViolations) -> Self {
        Self::Validation(violations)
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
