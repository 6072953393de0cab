//! Inventory stock ledger.
//!
//! In-memory item stock with quantity-validated additions and removals, an
//! append-only audit log, and aggregate valuation. Pure domain logic: no
//! persistence, no network, no process setup.

pub mod config;
pub mod item;
pub mod ledger;
pub mod log;
pub mod shared;

pub use config::LedgerConfig;
pub use item::Item;
pub use ledger::StockLedger;
pub use log::{LogEntry, StockAction};
pub use shared::SharedStockLedger;
