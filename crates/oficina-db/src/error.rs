//! Storage-layer error types and conversions.

use oficina_core::error::OficinaError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed row {row} in table {table}: {reason}")]
    Mapping {
        table: String,
        row: usize,
        reason: String,
    },

    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<DbError> for OficinaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Hash(msg) => OficinaError::Crypto(msg),
            other => OficinaError::Storage(other.to_string()),
        }
    }
}
