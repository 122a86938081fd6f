//! # gt-profile
//!
//! Profile data, the navigation shell model, and the theme preference.
//!
//! The theme flag is the only state in the app that survives a restart.
//! Everything else here is fixed presentation data: the demo identity and
//! the sidebar/bottom-nav menu items.
//!
//! ## Key components
//!
//! - [`Theme`] / [`ThemePreference`] — light/dark flag persisted to a tiny
//!   TOML file, falling back to a system-preference default when absent
//! - [`Profile`] — the fixed demo identity
//! - [`NavItem`] — menu items for the sidebar and bottom nav

pub mod error;
pub mod nav;
pub mod profile;
pub mod theme;

pub use error::ProfileError;
pub use nav::NavItem;
pub use profile::Profile;
pub use theme::{Theme, ThemePreference};
