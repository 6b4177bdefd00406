//! Constants shared by the renderer, the CLI and the terminal preview.
//!
//! Snapshot keys and their defaults mirror what the host app writes into the
//! widget preference store.

// ============================================================================
// Snapshot Keys
// ============================================================================

/// Spending for the current month.
pub const KEY_MONTH_TOTAL: &str = "month_total";

/// Spending for the current week.
pub const KEY_WEEK_TOTAL: &str = "week_total";

/// Spending for today.
pub const KEY_TODAY_TOTAL: &str = "today_total";

/// Monthly budget limit. Zero or less means no budget is configured.
pub const KEY_BUDGET_LIMIT: &str = "budget_limit";

/// Share of the budget already spent, in percent.
pub const KEY_BUDGET_PERCENT: &str = "budget_percent";

/// Symbol substituted into formatted amounts.
pub const KEY_CURRENCY_SYMBOL: &str = "currency_symbol";

/// Time of the last data refresh, shown verbatim.
pub const KEY_LAST_UPDATE: &str = "last_update";

/// All keys the renderer reads.
pub const RECOGNIZED_KEYS: [&str; 7] = [
    KEY_MONTH_TOTAL,
    KEY_WEEK_TOTAL,
    KEY_TODAY_TOTAL,
    KEY_BUDGET_LIMIT,
    KEY_BUDGET_PERCENT,
    KEY_CURRENCY_SYMBOL,
    KEY_LAST_UPDATE,
];

// ============================================================================
// Defaults
// ============================================================================

/// Value used for any missing or malformed numeric key.
pub const DEFAULT_AMOUNT: f64 = 0.0;

/// Symbol used when the snapshot carries none.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Placeholder shown when the snapshot has never been refreshed.
pub const DEFAULT_LAST_UPDATE: &str = "--:--";

// ============================================================================
// Labels
// ============================================================================

/// Prefix of the small widget's budget line.
pub const BUDGET_INFO_PREFIX: &str = "Budget: ";

/// Prefix of the medium widget's "last updated" line.
pub const LAST_UPDATED_PREFIX: &str = "Mis à jour à ";

/// Upper bound of the progress bar.
pub const PERCENT_MAX: u8 = 100;

// ============================================================================
// Navigation
// ============================================================================

/// Scheme used by every in-app deep link.
pub const DEEP_LINK_SCHEME: &str = "smartspend";

// ============================================================================
// Preview Dimensions
// ============================================================================

/// Rows used by the small widget preview, borders included.
pub const SMALL_WIDGET_HEIGHT: u16 = 5;

/// Rows used by the medium widget preview, borders included.
pub const MEDIUM_WIDGET_HEIGHT: u16 = 6;

/// Default preview width in columns.
pub const DEFAULT_PREVIEW_WIDTH: u16 = 42;
