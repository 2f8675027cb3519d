//! Administrator domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{Identity, Role};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn to_identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            national_id: None,
            role: Role::Admin,
            created_at: self.created_at,
            is_active: true,
        }
    }
}
