//! Authentication error types.

use oficina_core::error::OficinaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("role marker does not match the identity token")]
    RoleMismatch,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for OficinaError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired
            | AuthError::TokenInvalid(_)
            | AuthError::RoleMismatch => OficinaError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => OficinaError::Crypto(msg),
        }
    }
}
