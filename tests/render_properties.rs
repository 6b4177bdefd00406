//! End-to-end checks of the rendering contract through the public API.

use rstest::rstest;
use smartspend_widgets::{Snapshot, Variant, render};

const NBSP: char = '\u{00A0}';

/// Odd inputs the host app has been seen to write, plus outright garbage.
const RAW_VALUES: [&str; 14] = [
    "", "0", "0.0", "42.9", "-10", "145", "1e9", "-1e9", "NaN", "inf", "12,5", " 7 ", "abc",
    "99.999999",
];

#[test]
fn render_never_fails_and_percent_stays_in_range() {
    for raw in RAW_VALUES {
        let snapshot = Snapshot::new()
            .with("month_total", raw)
            .with("week_total", raw)
            .with("today_total", raw)
            .with("budget_limit", raw)
            .with("budget_percent", raw);

        for variant in Variant::ALL {
            let fields = render(&snapshot, variant);
            assert!(fields.percent <= 100, "{variant} raw={raw:?}");
            assert!(fields.amount.ends_with('€'), "{variant} raw={raw:?}");
            assert_eq!(
                fields.breakdown.is_some(),
                variant == Variant::Medium,
                "{variant} raw={raw:?}"
            );
        }
    }
}

#[test]
fn empty_snapshot_small() {
    let fields = render(&Snapshot::new(), Variant::Small);

    assert_eq!(fields.percent, 0);
    assert_eq!(fields.amount, format!("0,00{NBSP}€"));
    assert_eq!(fields.budget_info, "");
    assert!(!fields.budget_info_visible);
}

#[rstest]
#[case::above_range("145", 100)]
#[case::below_range("-10", 0)]
fn out_of_range_percent_is_clamped(#[case] raw: &str, #[case] expected: u8) {
    let snapshot = Snapshot::new().with("budget_percent", raw);
    assert_eq!(render(&snapshot, Variant::Small).percent, expected);
}

#[test]
fn budget_percent_is_truncated_not_rounded() {
    let snapshot: Snapshot = [("budget_limit", "500"), ("budget_percent", "42.9")]
        .into_iter()
        .collect();
    let fields = render(&snapshot, Variant::Small);

    assert!(fields.budget_info_visible);
    assert_eq!(fields.percent, 42);
}

#[test]
fn configured_symbol_replaces_default_glyph() {
    let snapshot: Snapshot = [("currency_symbol", "$"), ("month_total", "12.5")]
        .into_iter()
        .collect();
    let fields = render(&snapshot, Variant::Small);

    assert!(fields.amount.contains('$'));
    assert!(!fields.amount.contains('€'));
}

#[test]
fn medium_includes_totals_and_last_update() {
    let snapshot: Snapshot = [
        ("last_update", "14:05"),
        ("today_total", "3"),
        ("week_total", "10"),
    ]
    .into_iter()
    .collect();
    let fields = render(&snapshot, Variant::Medium);
    let breakdown = fields.breakdown.expect("medium has a breakdown");

    assert!(breakdown.today.starts_with("3,00"));
    assert!(breakdown.week.starts_with("10,00"));
    assert!(breakdown.last_updated.contains("14:05"));
}

#[test]
fn json_snapshot_renders_like_string_snapshot() {
    let from_json = Snapshot::from_json_str(
        r#"{"month_total": 12.5, "budget_limit": "500", "budget_percent": 42.9}"#,
    )
    .unwrap();
    let from_strings: Snapshot = [
        ("month_total", "12.5"),
        ("budget_limit", "500"),
        ("budget_percent", "42.9"),
    ]
    .into_iter()
    .collect();

    for variant in Variant::ALL {
        assert_eq!(render(&from_json, variant), render(&from_strings, variant));
    }
}

#[test]
fn display_fields_serialize_without_breakdown_for_small() {
    let fields = render(&Snapshot::new(), Variant::Small);
    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json["variant"], "small");
    assert_eq!(json["percent"], 0);
    assert!(json.get("breakdown").is_none());
}
