use std::collections::HashMap;

use chrono::{DateTime, Utc};

use stockledger_core::{Entity, ItemId, LedgerError, LedgerResult};

use crate::config::LedgerConfig;
use crate::item::Item;
use crate::log::{LogEntry, StockAction};

/// In-memory stock ledger: current items plus an append-only audit log.
///
/// Invariant: every stored item has `quantity > 0`. An item whose stock is
/// removed down to zero is deleted, never kept at zero.
///
/// Not synchronized; see `SharedStockLedger` for concurrent callers.
#[derive(Debug, Default)]
pub struct StockLedger {
    items: HashMap<ItemId, Item>,
    log: Vec<LogEntry>,
    config: LedgerConfig,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            items: HashMap::new(),
            log: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Add stock for `item`, accumulating onto any existing quantity.
    ///
    /// The incoming record replaces stored metadata (name, price). The audit
    /// entry records the resulting total, not the added amount.
    pub fn add_stock(&mut self, item: Item, user: &str) -> LedgerResult<()> {
        self.add_stock_at(item, user, Utc::now())
    }

    pub fn add_stock_at(
        &mut self,
        mut item: Item,
        user: &str,
        occurred_at: DateTime<Utc>,
    ) -> LedgerResult<()> {
        let item_id = item.id();

        if item.quantity <= 0 {
            let err = LedgerError::invalid_quantity(item_id, item.quantity);
            tracing::warn!(%item_id, user, error = %err, "stock-in rejected");
            return Err(err);
        }

        if let Some(existing) = self.items.get(&item_id) {
            let Some(total) = existing.quantity.checked_add(item.quantity) else {
                let err = LedgerError::overflow(item_id, existing.quantity, item.quantity);
                tracing::warn!(%item_id, user, error = %err, "stock-in rejected");
                return Err(err);
            };
            item.quantity = total;
        }
        let total = item.quantity;
        self.items.insert(item_id, item);

        self.log.push(LogEntry::new(
            StockAction::StockIn,
            user,
            item_id,
            total,
            &self.config.stock_in_reason,
            occurred_at,
        ));

        tracing::info!(%item_id, user, quantity = total, "stock in");
        Ok(())
    }

    /// Remove `quantity` units of `item_id`.
    ///
    /// Checks run in a fixed order: existence, then quantity sign, then
    /// sufficiency. The audit entry records the removed amount.
    pub fn remove_stock(&mut self, item_id: ItemId, quantity: i64, user: &str) -> LedgerResult<()> {
        self.remove_stock_at(item_id, quantity, user, Utc::now())
    }

    pub fn remove_stock_at(
        &mut self,
        item_id: ItemId,
        quantity: i64,
        user: &str,
        occurred_at: DateTime<Utc>,
    ) -> LedgerResult<()> {
        let checked = match self.items.get_mut(&item_id) {
            None => Err(LedgerError::not_found(item_id)),
            Some(_) if quantity <= 0 => Err(LedgerError::invalid_quantity(item_id, quantity)),
            Some(existing) if existing.quantity < quantity => Err(LedgerError::insufficient(
                item_id,
                existing.quantity,
                quantity,
            )),
            Some(existing) => {
                existing.quantity -= quantity;
                Ok(existing.quantity)
            }
        };
        let remaining = match checked {
            Ok(remaining) => remaining,
            Err(err) => {
                tracing::warn!(%item_id, user, requested = quantity, error = %err, "stock-out rejected");
                return Err(err);
            }
        };
        if remaining == 0 {
            self.items.remove(&item_id);
        }

        self.log.push(LogEntry::new(
            StockAction::StockOut,
            user,
            item_id,
            quantity,
            &self.config.stock_out_reason,
            occurred_at,
        ));

        tracing::info!(%item_id, user, quantity, remaining, "stock out");
        Ok(())
    }

    /// All current items. Order is unspecified.
    pub fn list_items(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn get_item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.get(&item_id)
    }

    /// The audit log in append order.
    pub fn view_audit_log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Σ quantity × price over current items.
    pub fn calculate_total_cost(&self) -> f64 {
        self.items.values().map(Item::value).sum()
    }

    /// Number of distinct items in stock.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
