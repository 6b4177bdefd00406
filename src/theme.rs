//! Colors and styles for the terminal widget preview.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color, used for the month total.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Progress bar color while under budget.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Progress bar color from [`WARNING_THRESHOLD`] on.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Progress bar color once the budget is used up.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Percent from which the gauge turns to [`WARNING_COLOR`].
pub const WARNING_THRESHOLD: u8 = 80;

// ============================================================================
// Style Constants
// ============================================================================

/// Border style of the widget frame.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title style of the widget frame.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style of the headline amount.
pub const AMOUNT_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Style of secondary lines.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Gauge color for a given budget percent.
#[must_use]
pub const fn gauge_color(percent: u8) -> Color {
    if percent >= 100 {
        ERROR_COLOR
    } else if percent >= WARNING_THRESHOLD {
        WARNING_COLOR
    } else {
        SUCCESS_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_color_thresholds() {
        let cases = [
            (0, SUCCESS_COLOR),
            (79, SUCCESS_COLOR),
            (80, WARNING_COLOR),
            (99, WARNING_COLOR),
            (100, ERROR_COLOR),
        ];

        for (percent, expected) in cases {
            assert_eq!(gauge_color(percent), expected, "percent={percent}");
        }
    }
}
