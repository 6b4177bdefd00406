//! Widget size variants.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{MEDIUM_WIDGET_HEIGHT, SMALL_WIDGET_HEIGHT};

/// Home-screen widget layout. Each variant populates a fixed set of fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Month total, progress bar and an optional budget line.
    #[default]
    Small,
    /// Month, today and week totals, progress bar and a "last updated" line.
    Medium,
}

impl Variant {
    /// Every variant, in display order.
    pub const ALL: [Self; 2] = [Self::Small, Self::Medium];

    /// Lowercase name, as used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }

    /// Whether this layout shows the today / week breakdown.
    #[must_use]
    pub const fn shows_breakdown(self) -> bool {
        matches!(self, Self::Medium)
    }

    /// Rows needed by the terminal preview, borders included.
    #[must_use]
    pub const fn preview_height(self) -> u16 {
        match self {
            Self::Small => SMALL_WIDGET_HEIGHT,
            Self::Medium => MEDIUM_WIDGET_HEIGHT,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
