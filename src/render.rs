//! Snapshot-to-display transformation.
//!
//! [`WidgetSnapshotRenderer::render`] is a total, side-effect free function:
//! any snapshot, however incomplete or malformed, yields a complete
//! [`DisplayFields`]. It holds no state between calls, so one renderer can
//! serve every widget refresh.

use crate::constants::{
    BUDGET_INFO_PREFIX, DEFAULT_CURRENCY_SYMBOL, DEFAULT_LAST_UPDATE, KEY_BUDGET_LIMIT,
    KEY_BUDGET_PERCENT, KEY_CURRENCY_SYMBOL, KEY_LAST_UPDATE, KEY_MONTH_TOTAL, KEY_TODAY_TOTAL,
    KEY_WEEK_TOTAL, LAST_UPDATED_PREFIX,
};
use crate::domain::{Breakdown, DisplayFields, Snapshot, Variant};
use crate::format::{CurrencyFormatter, clamp_percent};

// ============================================================================
// WidgetSnapshotRenderer
// ============================================================================

/// Turns a [`Snapshot`] into [`DisplayFields`] for a given [`Variant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetSnapshotRenderer {
    formatter: CurrencyFormatter,
}

impl WidgetSnapshotRenderer {
    /// Renderer using the fr-FR currency format.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            formatter: CurrencyFormatter::FR_FR,
        }
    }

    /// Resolve every display field for `variant`.
    #[must_use]
    pub fn render(&self, snapshot: &Snapshot, variant: Variant) -> DisplayFields {
        let symbol = snapshot.text_or(KEY_CURRENCY_SYMBOL, DEFAULT_CURRENCY_SYMBOL);
        let amount = |key: &str| {
            self.formatter
                .format_with_symbol(snapshot.number(key), symbol)
        };

        let percent = clamp_percent(snapshot.number(KEY_BUDGET_PERCENT));
        let budget_info_visible = snapshot.number(KEY_BUDGET_LIMIT) > 0.0;
        let budget_info = if budget_info_visible {
            format!("{BUDGET_INFO_PREFIX}{percent}%")
        } else {
            String::new()
        };

        let breakdown = variant.shows_breakdown().then(|| Breakdown {
            today: amount(KEY_TODAY_TOTAL),
            week: amount(KEY_WEEK_TOTAL),
            percent_label: format!("{percent}%"),
            last_updated: format!(
                "{LAST_UPDATED_PREFIX}{}",
                snapshot.text_or(KEY_LAST_UPDATE, DEFAULT_LAST_UPDATE)
            ),
        });

        tracing::trace!(%variant, percent, budget_info_visible, "Rendered widget snapshot");

        DisplayFields {
            variant,
            amount: amount(KEY_MONTH_TOTAL),
            percent,
            budget_info_visible,
            budget_info,
            breakdown,
        }
    }
}

/// Render `snapshot` with the default fr-FR renderer.
#[must_use]
pub fn render(snapshot: &Snapshot, variant: Variant) -> DisplayFields {
    WidgetSnapshotRenderer::new().render(snapshot, variant)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SnapshotMother;
    use insta::assert_snapshot;
    use rstest::rstest;

    const NBSP: char = '\u{00A0}';
    const NNBSP: char = '\u{202F}';

    #[test]
    fn test_empty_snapshot_small() {
        let fields = render(&Snapshot::new(), Variant::Small);

        assert_eq!(fields.variant, Variant::Small);
        assert_eq!(fields.amount, format!("0,00{NBSP}€"));
        assert_eq!(fields.percent, 0);
        assert!(!fields.budget_info_visible);
        assert_eq!(fields.budget_info, "");
        assert!(fields.breakdown.is_none());
    }

    #[test]
    fn test_empty_snapshot_medium_uses_defaults() {
        let fields = render(&Snapshot::new(), Variant::Medium);
        let breakdown = fields.breakdown.expect("medium has a breakdown");

        assert_eq!(breakdown.today, format!("0,00{NBSP}€"));
        assert_eq!(breakdown.week, format!("0,00{NBSP}€"));
        assert_eq!(breakdown.percent_label, "0%");
        assert_eq!(breakdown.last_updated, "Mis à jour à --:--");
    }

    #[rstest]
    #[case::over("145", 100)]
    #[case::under("-10", 0)]
    #[case::truncated("42.9", 42)]
    #[case::exact("100", 100)]
    #[case::garbage("n/a", 0)]
    fn test_percent_is_clamped(#[case] raw: &str, #[case] expected: u8) {
        let snapshot = Snapshot::new().with(KEY_BUDGET_PERCENT, raw);
        for variant in Variant::ALL {
            assert_eq!(render(&snapshot, variant).percent, expected, "{variant} raw={raw}");
        }
    }

    #[test]
    fn test_budget_info_visible_with_limit() {
        let snapshot = Snapshot::new()
            .with(KEY_BUDGET_LIMIT, "500")
            .with(KEY_BUDGET_PERCENT, "42.9");
        let fields = render(&snapshot, Variant::Small);

        assert!(fields.budget_info_visible);
        assert_eq!(fields.percent, 42);
        assert_eq!(fields.budget_info, "Budget: 42%");
    }

    #[test]
    fn test_budget_info_uses_clamped_percent() {
        let snapshot = Snapshot::new()
            .with(KEY_BUDGET_LIMIT, "100")
            .with(KEY_BUDGET_PERCENT, "250");
        let fields = render(&snapshot, Variant::Small);
        assert_eq!(fields.budget_info, "Budget: 100%");
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-5")]
    #[case::malformed("lots")]
    fn test_budget_info_hidden_without_positive_limit(#[case] limit: &str) {
        let snapshot = Snapshot::new()
            .with(KEY_BUDGET_LIMIT, limit)
            .with(KEY_BUDGET_PERCENT, "30");
        let fields = render(&snapshot, Variant::Small);

        assert!(!fields.budget_info_visible);
        assert_eq!(fields.budget_info, "");
        assert_eq!(fields.percent, 30);
    }

    #[test]
    fn test_currency_symbol_substitution() {
        let snapshot = Snapshot::new()
            .with(KEY_CURRENCY_SYMBOL, "$")
            .with(KEY_MONTH_TOTAL, "12.5");
        let fields = render(&snapshot, Variant::Small);

        assert_eq!(fields.amount, format!("12,50{NBSP}$"));
        assert!(!fields.amount.contains('€'));
    }

    #[test]
    fn test_medium_breakdown() {
        let snapshot = Snapshot::new()
            .with(KEY_LAST_UPDATE, "14:05")
            .with(KEY_TODAY_TOTAL, "3")
            .with(KEY_WEEK_TOTAL, "10");
        let breakdown = render(&snapshot, Variant::Medium)
            .breakdown
            .expect("medium has a breakdown");

        assert_eq!(breakdown.today, format!("3,00{NBSP}€"));
        assert_eq!(breakdown.week, format!("10,00{NBSP}€"));
        assert!(breakdown.last_updated.contains("14:05"));
    }

    #[test]
    fn test_last_update_is_verbatim() {
        let snapshot = Snapshot::new().with(KEY_LAST_UPDATE, "hier, 25:99");
        let breakdown = render(&snapshot, Variant::Medium).breakdown.unwrap();
        assert_eq!(breakdown.last_updated, "Mis à jour à hier, 25:99");
    }

    #[test]
    fn test_small_ignores_breakdown_keys() {
        let fields = render(&SnapshotMother::full(), Variant::Small);
        assert!(fields.breakdown.is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let snapshot = SnapshotMother::full();
        let renderer = WidgetSnapshotRenderer::new();
        for variant in Variant::ALL {
            assert_eq!(
                renderer.render(&snapshot, variant),
                renderer.render(&snapshot, variant)
            );
        }
    }

    #[test]
    fn test_grouping_survives_symbol_swap() {
        let snapshot = Snapshot::new()
            .with(KEY_CURRENCY_SYMBOL, "£")
            .with(KEY_MONTH_TOTAL, "2500.75");
        let fields = render(&snapshot, Variant::Small);
        assert_eq!(fields.amount, format!("2{NNBSP}500,75{NBSP}£"));
    }

    #[test]
    fn test_text_summary_medium() {
        let fields = render(&SnapshotMother::full(), Variant::Medium);
        let text = fields
            .to_string()
            .replace(NBSP, " ")
            .replace(NNBSP, " ");

        assert_snapshot!(text, @r"
        variant: medium
        amount: 1 234,56 €
        percent: 61
        budget_info: Budget: 61%
        today: 12,40 €
        week: 86,10 €
        percent_label: 61%
        last_updated: Mis à jour à 18:42
        ");
    }
}
