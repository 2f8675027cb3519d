//! Quote domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub client_id: String,
    pub vehicle_id: String,
    pub description: String,
    /// Total in centavos.
    pub total_cents: i64,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}
