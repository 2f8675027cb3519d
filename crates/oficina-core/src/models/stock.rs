//! Stock (inventory) domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub min_quantity: u32,
    /// Price in centavos.
    pub unit_price_cents: i64,
}

impl StockItem {
    pub fn is_below_minimum(&self) -> bool {
        self.quantity < self.min_quantity
    }
}
