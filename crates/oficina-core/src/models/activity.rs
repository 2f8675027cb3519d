//! Activity log domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of entries kept before the oldest are evicted.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 1000;

/// One user-initiated action. Entries are never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub actor_id: String,
    pub actor_name: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub module: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityLogEntry {
    pub actor_id: String,
    pub actor_name: String,
    pub action: String,
    pub details: String,
    pub module: String,
}
