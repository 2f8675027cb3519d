//! Employee domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{Identity, Role};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Job title, e.g. "Mecânico".
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn to_identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            national_id: None,
            role: Role::Employee,
            created_at: self.created_at,
            is_active: self.active,
        }
    }
}
