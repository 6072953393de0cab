//! Ledger error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is locally recoverable: validation runs before any state
/// change, so a failed call leaves items and audit log untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A non-positive quantity was supplied to an add or a remove.
    #[error("quantity must be greater than zero (item: {item_id}, quantity: {quantity})")]
    InvalidQuantity { item_id: ItemId, quantity: i64 },

    /// Removal was requested against an identifier that is not in stock.
    #[error("item {item_id} does not exist in stock")]
    ItemNotFound { item_id: ItemId },

    /// Removal asked for more than is on hand.
    #[error("insufficient stock for item {item_id} (available: {available}, requested: {requested})")]
    InsufficientStock {
        item_id: ItemId,
        available: i64,
        requested: i64,
    },

    /// Adding to an existing item would exceed the representable quantity.
    #[error("quantity overflow for item {item_id} (available: {available}, added: {added})")]
    QuantityOverflow {
        item_id: ItemId,
        available: i64,
        added: i64,
    },

    /// A filter produced no matches.
    #[error("no matching items found")]
    EmptyResult,

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The shared ledger lock was poisoned by a panicking holder.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

impl LedgerError {
    pub fn invalid_quantity(item_id: ItemId, quantity: i64) -> Self {
        Self::InvalidQuantity { item_id, quantity }
    }

    pub fn not_found(item_id: ItemId) -> Self {
        Self::ItemNotFound { item_id }
    }

    pub fn insufficient(item_id: ItemId, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            item_id,
            available,
            requested,
        }
    }

    pub fn overflow(item_id: ItemId, available: i64, added: i64) -> Self {
        Self::QuantityOverflow {
            item_id,
            available,
            added,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_reports_available_and_requested() {
        let err = LedgerError::insufficient(ItemId::new(1), 8, 10);
        let msg = err.to_string();
        assert!(msg.contains("available: 8"), "{msg}");
        assert!(msg.contains("requested: 10"), "{msg}");
    }

    #[test]
    fn overflow_message_reports_both_quantities() {
        let msg = LedgerError::overflow(ItemId::new(3), i64::MAX, 2).to_string();
        assert!(msg.contains(&format!("available: {}", i64::MAX)), "{msg}");
        assert!(msg.contains("added: 2"), "{msg}");
    }

    #[test]
    fn invalid_quantity_message_names_the_item() {
        let err = LedgerError::invalid_quantity(ItemId::new(42), 0);
        assert!(err.to_string().contains("item: 42"));
    }
}
