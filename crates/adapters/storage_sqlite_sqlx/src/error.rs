//! Storage-specific error type wrapping sqlx errors.

use kennywood_domain::error::KennywoodError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for KennywoodError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
