//! Data models for the Qzene recipe filter engine.
//!
//! - [`Recipe`]: a validated catalog recipe, plus the enums it is filtered by
//!   ([`Difficulty`], [`DeviceSupport`], [`ReviewStatus`])
//! - [`RawRecipe`]: a catalog entry as read from disk, before ingestion
//! - [`FilterState`]: the filter selections of one recipe view, with
//!   [`CookingTimeRange`] and [`FilterField`]
//! - [`Settings`]: application settings loaded by
//!   [`ConfigManager`](crate::config::ConfigManager)

pub mod config;
pub mod filter_state;
pub mod recipe;

pub use config::Settings;
pub use filter_state::{
    COOKING_TIME_MAX, COOKING_TIME_MIN, COOKING_TIME_STEP, CookingTimeRange, FilterError,
    FilterField, FilterState,
};
pub use recipe::{DeviceSupport, Difficulty, RawId, RawRecipe, Recipe, ReviewStatus};
