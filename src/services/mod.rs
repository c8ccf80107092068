//! Services module - pure recipe filtering logic.
//!
//! Nothing in here knows about the command line or any other front end, and
//! nothing in here holds state between calls.
//!
//! # Components
//!
//! - [`filter`]: the filter engine ([`filter_recipes`], [`reset_filters`]) and
//!   the individual predicates it is built from
//! - [`badges`]: the active-filter summary ([`active_filters`]) used for
//!   removable badges
//! - [`admin`]: the admin explorer filter (review tab + name search)
//! - [`catalog`]: recipe sources and ingestion of loosely typed records into
//!   a validated [`Catalog`]
//!
//! # Usage Example
//!
//! ```ignore
//! use qzene::services::{filter_recipes, BundledCatalog, Catalog};
//! use qzene::models::{DeviceSupport, FilterState};
//!
//! let catalog = Catalog::load_from(&BundledCatalog)?.catalog;
//! let state = FilterState::new()
//!     .with_search("tomato")
//!     .with_device(DeviceSupport::MoMe);
//!
//! for recipe in filter_recipes(catalog.recipes(), &state) {
//!     println!("{}", recipe.name);
//! }
//! ```

pub mod admin;
pub mod badges;
pub mod catalog;
pub mod filter;

pub use admin::{AdminQuery, AdminTab, filter_admin_recipes};
pub use badges::{ActiveFilter, active_filters};
pub use catalog::{BundledCatalog, Catalog, CatalogError, FileCatalog, IngestReport, RecipeSource};
pub use filter::{FilterSummary, RecipeFilter, filter_recipes, reset_filters, summarize};
