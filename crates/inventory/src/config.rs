//! Ledger configuration.

/// Env var overriding the reason recorded on stock-in entries.
pub const STOCK_IN_REASON_ENV: &str = "STOCK_LEDGER_STOCK_IN_REASON";
/// Env var overriding the reason recorded on stock-out entries.
pub const STOCK_OUT_REASON_ENV: &str = "STOCK_LEDGER_STOCK_OUT_REASON";

const DEFAULT_STOCK_IN_REASON: &str = "adding new items to stock";
const DEFAULT_STOCK_OUT_REASON: &str = "removing items from stock";

/// Free-text reasons attached to audit entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub stock_in_reason: String,
    pub stock_out_reason: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            stock_in_reason: DEFAULT_STOCK_IN_REASON.to_string(),
            stock_out_reason: DEFAULT_STOCK_OUT_REASON.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Read overrides from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
        };

        Self {
            stock_in_reason: read(STOCK_IN_REASON_ENV, defaults.stock_in_reason),
            stock_out_reason: read(STOCK_OUT_REASON_ENV, defaults.stock_out_reason),
        }
    }
}
