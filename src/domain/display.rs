//! Render-ready output of the snapshot renderer.

use std::fmt;

use serde::Serialize;

use super::variant::Variant;

// ============================================================================
// DisplayFields
// ============================================================================

/// Resolved strings and flags for one widget refresh.
///
/// Produced by [`WidgetSnapshotRenderer`](crate::render::WidgetSnapshotRenderer)
/// and consumed by whatever paints the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFields {
    /// Layout these fields were resolved for.
    pub variant: Variant,
    /// Formatted month total.
    pub amount: String,
    /// Progress bar position, always within `0..=100`.
    pub percent: u8,
    /// Whether a budget is configured.
    pub budget_info_visible: bool,
    /// `"Budget: N%"`, or empty when no budget is configured.
    pub budget_info: String,
    /// Extra lines of the medium layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

/// Medium-only fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    /// Formatted total for today.
    pub today: String,
    /// Formatted total for the current week.
    pub week: String,
    /// `"N%"`.
    pub percent_label: String,
    /// `"Mis à jour à HH:MM"`.
    pub last_updated: String,
}

impl fmt::Display for DisplayFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "variant: {}", self.variant)?;
        writeln!(f, "amount: {}", self.amount)?;
        writeln!(f, "percent: {}", self.percent)?;
        if self.budget_info_visible {
            writeln!(f, "budget_info: {}", self.budget_info)?;
        }
        if let Some(breakdown) = &self.breakdown {
            writeln!(f, "today: {}", breakdown.today)?;
            writeln!(f, "week: {}", breakdown.week)?;
            writeln!(f, "percent_label: {}", breakdown.percent_label)?;
            writeln!(f, "last_updated: {}", breakdown.last_updated)?;
        }
        Ok(())
    }
}
