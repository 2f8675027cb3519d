//! Error types for the Oficina console.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OficinaError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),
}

pub type OficinaResult<T> = Result<T, OficinaError>;
