//! Thread-safe handle over a `StockLedger`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockledger_core::{ItemId, LedgerError, LedgerResult};

use crate::item::Item;
use crate::ledger::StockLedger;
use crate::log::LogEntry;

/// Cloneable, lock-protected stock ledger.
///
/// Items and audit log sit behind one lock, and every operation holds it for
/// its whole duration, so no caller observes a half-applied add or remove.
/// Reads return owned snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedStockLedger {
    inner: Arc<RwLock<StockLedger>>,
}

impl SharedStockLedger {
    pub fn new(ledger: StockLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, StockLedger>> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, StockLedger>> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }

    pub fn add_stock(&self, item: Item, user: &str) -> LedgerResult<()> {
        self.write()?.add_stock(item, user)
    }

    pub fn remove_stock(&self, item_id: ItemId, quantity: i64, user: &str) -> LedgerResult<()> {
        self.write()?.remove_stock(item_id, quantity, user)
    }

    pub fn list_items(&self) -> LedgerResult<Vec<Item>> {
        Ok(self.read()?.list_items())
    }

    pub fn view_audit_log(&self) -> LedgerResult<Vec<LogEntry>> {
        Ok(self.read()?.view_audit_log().to_vec())
    }

    pub fn calculate_total_cost(&self) -> LedgerResult<f64> {
        Ok(self.read()?.calculate_total_cost())
    }

    /// Run several reads against one consistent view of the ledger.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&StockLedger) -> R) -> LedgerResult<R> {
        let guard = self.read()?;
        Ok(f(&guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_adds_and_removes_stay_consistent() {
        let shared = SharedStockLedger::default();
        shared.add_stock(Item::new(1, 100, 1.0), "seed").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let ledger = shared.clone();
                thread::spawn(move || {
                    let user = format!("worker-{n}");
                    for _ in 0..10 {
                        ledger.add_stock(Item::new(1, 2, 1.0), &user).unwrap();
                        ledger.remove_stock(ItemId::new(1), 1, &user).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let (quantity, log_len) = shared
            .with_ledger(|l| (l.get_item(ItemId::new(1)).map(|i| i.quantity), l.view_audit_log().len()))
            .unwrap();
        assert_eq!(quantity, Some(100 + 8 * 10));
        assert_eq!(log_len, 1 + 8 * 10 * 2);
        assert_eq!(shared.calculate_total_cost().unwrap(), 180.0);
    }

    #[test]
    fn failures_propagate_through_the_handle() {
        let shared = SharedStockLedger::new(StockLedger::new());
        let err = shared.remove_stock(ItemId::new(5), 1, "bob").unwrap_err();
        assert_eq!(err, LedgerError::not_found(ItemId::new(5)));
        assert!(shared.view_audit_log().unwrap().is_empty());
        assert!(shared.list_items().unwrap().is_empty());
    }
}
