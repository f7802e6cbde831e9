//! Error types for the PlanItout ecosystem.

use thiserror::Error;

/// Errors that can occur in PlanItout operations.
///
/// Remote fetch failures are usually absorbed by the catalog (it degrades
/// to sample-only data); everything else is reported to the caller and
/// never retried automatically.
#[derive(Error, Debug)]
pub enum PlanItOutError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Remote fetch failed: {0}")]
    RemoteFetch(String),

    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    #[error("{0}")]
    Policy(String),
}

/// Result type alias for PlanItout operations.
pub type PlanItOutResult<T> = Result<T, PlanItOutError>;
