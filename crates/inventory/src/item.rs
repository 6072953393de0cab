use serde::{Deserialize, Serialize};

use stockledger_core::{Entity, ItemId};

/// A stock-tracked item.
///
/// Callers build these freely; the ledger enforces the quantity rules when an
/// item is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    pub quantity: i64,
    /// Unit price. Plain `f64`; no currency rounding is applied.
    pub price: f64,
}

impl Item {
    pub fn new(id: i64, quantity: i64, price: f64) -> Self {
        Self {
            id: ItemId::new(id),
            name: String::new(),
            quantity,
            price,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stock value of this line: quantity × unit price.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
