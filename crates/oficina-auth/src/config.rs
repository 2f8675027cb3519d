//! Authentication configuration.

use oficina_core::models::activity::DEFAULT_ACTIVITY_LOG_CAPACITY;

/// Configuration for the authenticator and session markers.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// PEM-encoded Ed25519 private key for identity token signing.
    pub jwt_private_key_pem: String,
    /// PEM-encoded Ed25519 public key for identity token verification.
    pub jwt_public_key_pem: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Session and marker lifetime in seconds (default: 28_800 = 8 hours).
    pub session_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id verification.
    pub pepper: Option<String>,
    /// Entries kept in the activity log (default: 1000).
    pub activity_log_capacity: usize,
}

impl AuthConfig {
    pub fn session_lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_lifetime_secs as i64)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_private_key_pem: String::new(),
            jwt_public_key_pem: String::new(),
            jwt_issuer: "oficina".into(),
            session_lifetime_secs: 28_800,
            pepper: None,
            activity_log_capacity: DEFAULT_ACTIVITY_LOG_CAPACITY,
        }
    }
}
