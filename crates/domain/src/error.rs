//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DronemartError`] via `#[from]`. Storage adapters box their driver
//! errors behind [`DronemartError::Storage`] so the domain never names a
//! driver type.

use crate::id::ParseIdError;

/// Top-level error for all dronemart operations.
#[derive(Debug, thiserror::Error)]
pub enum DronemartError {
    /// The request carried data the API cannot interpret.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The storage layer failed; the source is logged, never shown to
    /// clients.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A path segment could not be parsed as a document id.
    #[error(transparent)]
    MalformedId(#[from] ParseIdError),

    /// A user upsert body is missing its `email` key.
    #[error("user document has no email field")]
    MissingEmail,
}
