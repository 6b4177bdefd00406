//! Domain types for widget rendering.
//!
//! - [`Snapshot`]: the key-value input written by the host app
//! - [`Variant`]: small or medium layout
//! - [`DisplayFields`]: the resolved output
//! - [`InteractiveRegion`] / [`NavTarget`]: tappable areas and their deep links
//! - [`SnapshotError`]: failures while loading a snapshot

mod display;
mod error;
mod navigation;
mod snapshot;
mod variant;

pub use display::{Breakdown, DisplayFields};
pub use error::SnapshotError;
pub use navigation::{InteractiveRegion, NavTarget};
pub use snapshot::Snapshot;
pub use variant::Variant;
