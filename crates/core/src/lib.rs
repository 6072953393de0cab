//! `stockledger-core` — domain building blocks shared by the stock ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod query;

pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use event::AuditEvent;
pub use id::ItemId;
pub use query::find_by;
