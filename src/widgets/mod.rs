//! Terminal widgets painting resolved display fields.
//!
//! - [`HomeWidget`]: small or medium home-screen widget preview

mod home;

pub use home::HomeWidget;
