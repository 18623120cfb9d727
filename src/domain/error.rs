//! Domain errors
//!
//! Expected outcomes (missing field, unknown id, rejected insert) are not
//! errors; they travel as values through `ServiceOutcome`. This type only
//! covers faults of the backing store.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// The backing store could not complete the operation
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for repository operations
pub type DomainResult<T> = Result<T, DomainError>;
