//! Audit log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockledger_core::{AuditEvent, ItemId};

/// Kind of stock-affecting operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    StockIn,
    StockOut,
}

impl StockAction {
    pub fn event_type(self) -> &'static str {
        match self {
            StockAction::StockIn => "inventory.stock.in",
            StockAction::StockOut => "inventory.stock.out",
        }
    }
}

impl core::fmt::Display for StockAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockAction::StockIn => f.write_str("stock in"),
            StockAction::StockOut => f.write_str("stock out"),
        }
    }
}

/// One audit record (immutable once created).
///
/// `quantity` is the post-addition total for stock-in entries and the removed
/// amount for stock-out entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    entry_id: Uuid,
    timestamp: DateTime<Utc>,
    action: StockAction,
    user: String,
    item_id: ItemId,
    quantity: i64,
    reason: String,
}

impl LogEntry {
    pub(crate) fn new(
        action: StockAction,
        user: &str,
        item_id: ItemId,
        quantity: i64,
        reason: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            timestamp,
            action,
            user: user.to_string(),
            item_id,
            quantity,
            reason: reason.to_string(),
        }
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn action(&self) -> StockAction {
        self.action
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl AuditEvent for LogEntry {
    fn event_type(&self) -> &'static str {
        self.action.event_type()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn actor(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_action_in_snake_case() {
        let entry = LogEntry::new(
            StockAction::StockOut,
            "bob",
            ItemId::new(3),
            2,
            "removing items from stock",
            Utc::now(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "stock_out");
        assert_eq!(json["item_id"], 3);
        assert_eq!(json["user"], "bob");
    }

    #[test]
    fn audit_event_type_follows_action() {
        let entry = LogEntry::new(StockAction::StockIn, "alice", ItemId::new(1), 5, "", Utc::now());
        assert_eq!(entry.event_type(), "inventory.stock.in");
        assert_eq!(entry.actor(), "alice");
        assert_eq!(entry.occurred_at(), entry.timestamp());
    }
}
