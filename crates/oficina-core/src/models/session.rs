//! Session domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{Identity, Role};

/// The two values handed to the browser on login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionMarkers {
    /// Signed identity token.
    pub identity_token: String,
    /// Role marker, checked against the token's role claim.
    pub role: Role,
}

/// Who is logged in within one browser profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Browser profile this session belongs to.
    pub profile: String,
    pub identity: Identity,
    pub markers: SessionMarkers,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn expires_at(&self, lifetime: Duration) -> DateTime<Utc> {
        self.created_at + lifetime
    }

    /// A session is expired from `created_at + lifetime` onwards.
    pub fn is_expired_at(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now >= self.expires_at(lifetime)
    }
}
