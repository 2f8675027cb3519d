//! Vehicle domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: String,
    pub client_id: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub color: Option<String>,
}
