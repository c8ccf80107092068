// Qzene - recipe catalog filtering engine
//
// This is the library crate containing the filter engine and its data model.
// The binary crate (main.rs) provides the command-line front end.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use crate::config::ConfigManager;
pub use models::{CookingTimeRange, DeviceSupport, Difficulty, FilterState, Recipe, Settings};
pub use services::{ActiveFilter, Catalog, active_filters, filter_recipes, reset_filters};
pub use state::{FilterChange, FilterSession};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
