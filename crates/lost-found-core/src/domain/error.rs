//! Domain Layer - Errors
//!
//! Errors surfaced by gateways and the controller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Backend did not finish initialising in time.
    #[error("Storage not ready: {0}")]
    NotReady(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend acknowledged a mutation it did not apply.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport or backend failure (JS exception, bad payload, ...).
    #[error("Backend error: {0}")]
    Backend(String),
}

impl DomainError {
    /// Whether this error means the store is in an inconsistent state
    /// rather than a plain failed operation.
    pub fn is_consistency_violation(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }
}
