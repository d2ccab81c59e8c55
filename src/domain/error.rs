//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated preconditions of tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
