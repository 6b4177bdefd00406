//! Interactive regions of a widget and the in-app screens they open.
//!
//! The host wires each region to a deep link; this module only names the
//! targets so that every adapter agrees on them.

use std::fmt;

use serde::Serialize;

use crate::constants::DEEP_LINK_SCHEME;

// ============================================================================
// NavTarget
// ============================================================================

/// In-app screen reachable from a widget tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// Main view of the app.
    OpenApp,
    /// Expense entry form.
    AddExpense,
}

impl NavTarget {
    /// Path component of the deep link.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::OpenApp => "open_app",
            Self::AddExpense => "add_expense",
        }
    }

    /// Full deep-link URI, e.g. `smartspend://add_expense`.
    #[must_use]
    pub fn uri(self) -> String {
        format!("{DEEP_LINK_SCHEME}://{}", self.path())
    }

    /// Stable request code distinguishing the two pending launches.
    #[must_use]
    pub const fn request_code(self) -> u8 {
        match self {
            Self::OpenApp => 0,
            Self::AddExpense => 1,
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEEP_LINK_SCHEME}://{}", self.path())
    }
}

// ============================================================================
// InteractiveRegion
// ============================================================================

/// Tappable area of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractiveRegion {
    /// The month total.
    Amount,
    /// The "+" button.
    AddButton,
}

impl InteractiveRegion {
    /// Both regions, in wiring order.
    pub const ALL: [Self; 2] = [Self::Amount, Self::AddButton];

    /// Screen opened when this region is tapped.
    #[must_use]
    pub const fn target(self) -> NavTarget {
        match self {
            Self::Amount => NavTarget::OpenApp,
            Self::AddButton => NavTarget::AddExpense,
        }
    }

    /// Snake-case name, as printed by the `links` command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::AddButton => "add_button",
        }
    }
}
