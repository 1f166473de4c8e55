//! Storage-specific error type wrapping driver errors.

use dronemart_domain::error::DronemartError;

/// Errors originating from the MongoDB storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A driver operation or the connection failed.
    #[error("database error")]
    Database(#[from] mongodb::error::Error),

    /// Failed to encode a JSON document as BSON.
    #[error("BSON encoding error")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// The database acknowledged a write with an identifier that is not an
    /// `ObjectId`.
    #[error("storage returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

impl From<StorageError> for DronemartError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
