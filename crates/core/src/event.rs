use chrono::{DateTime, Utc};

/// A record of one stock-affecting operation.
///
/// Audit events are:
/// - **immutable** (treat them as facts)
/// - **append-only** (never trimmed or reordered)
pub trait AuditEvent: Clone + core::fmt::Debug {
    /// Stable event name (e.g. "inventory.stock.in").
    fn event_type(&self) -> &'static str;

    /// When the operation happened.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// The acting user, as supplied by the caller (unvalidated).
    fn actor(&self) -> &str;
}
