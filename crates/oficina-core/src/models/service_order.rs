//! Service order domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOrder {
    pub id: String,
    pub client_id: String,
    pub vehicle_id: String,
    pub description: String,
    pub status: ServiceStatus,
    /// Amount in centavos.
    pub value_cents: i64,
    pub opened_at: DateTime<Utc>,
}
