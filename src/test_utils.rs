//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::constants::{
    KEY_BUDGET_LIMIT, KEY_BUDGET_PERCENT, KEY_CURRENCY_SYMBOL, KEY_LAST_UPDATE, KEY_MONTH_TOTAL,
    KEY_TODAY_TOTAL, KEY_WEEK_TOTAL,
};
use crate::domain::Snapshot;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SnapshotMother;

impl SnapshotMother {
    /// Every recognized key set, with a budget configured.
    #[must_use]
    pub fn full() -> Snapshot {
        Snapshot::new()
            .with(KEY_MONTH_TOTAL, "1234.56")
            .with(KEY_WEEK_TOTAL, "86.1")
            .with(KEY_TODAY_TOTAL, "12.4")
            .with(KEY_BUDGET_LIMIT, "2000")
            .with(KEY_BUDGET_PERCENT, "61.7")
            .with(KEY_CURRENCY_SYMBOL, "€")
            .with(KEY_LAST_UPDATE, "18:42")
    }

    /// A snapshot written before the user set up a budget.
    #[must_use]
    pub fn without_budget() -> Snapshot {
        Snapshot::new()
            .with(KEY_MONTH_TOTAL, "45")
            .with(KEY_BUDGET_LIMIT, "0")
            .with(KEY_BUDGET_PERCENT, "0")
    }

    /// Over budget, in dollars.
    #[must_use]
    pub fn overspent_dollars() -> Snapshot {
        Snapshot::new()
            .with(KEY_MONTH_TOTAL, "2600")
            .with(KEY_BUDGET_LIMIT, "2000")
            .with(KEY_BUDGET_PERCENT, "130")
            .with(KEY_CURRENCY_SYMBOL, "$")
            .with(KEY_LAST_UPDATE, "09:15")
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(40, 8)).expect("terminal creation should succeed")
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Concatenate every cell symbol of `buffer`, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
