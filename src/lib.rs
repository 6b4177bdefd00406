//! SmartSpend home-screen widget rendering.
//!
//! The host app caches its latest financial summary as a flat key-value
//! [`Snapshot`]. On every widget refresh, [`render`] turns that snapshot into
//! [`DisplayFields`]: formatted amounts, a clamped progress percent, the
//! budget-info visibility flag and the "last updated" label. Rendering is a
//! total function; malformed or missing values degrade to defaults.
//!
//! ```
//! use smartspend_widgets::{Snapshot, Variant, render};
//!
//! let snapshot = Snapshot::new()
//!     .with("budget_limit", "500")
//!     .with("budget_percent", "42.9");
//! let fields = render(&snapshot, Variant::Small);
//!
//! assert_eq!(fields.percent, 42);
//! assert_eq!(fields.budget_info, "Budget: 42%");
//! ```

pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod input;
pub mod render;
pub mod theme;
pub mod tui;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use domain::{
    Breakdown, DisplayFields, InteractiveRegion, NavTarget, Snapshot, SnapshotError, Variant,
};
pub use render::{WidgetSnapshotRenderer, render};
