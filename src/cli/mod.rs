//! Command-line front end.
//!
//! The CLI is the front end the filter engine reports to: it builds a
//! [`FilterState`] from flags, runs the filter, and renders badges and results
//! through [`render`].

pub mod render;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::models::{CookingTimeRange, DeviceSupport, Difficulty, FilterState};
use crate::services::{AdminQuery, AdminTab, filter_admin_recipes};
use crate::state::FilterSession;

#[derive(Parser, Debug)]
#[command(name = "qzene")]
#[command(about = "Browse and filter the Qzene recipe catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding "Qzene Settings.yaml"
    #[arg(long, global = true, default_value = "Qzene Data")]
    pub config_dir: Utf8PathBuf,

    /// Recipe catalog file (overrides the configured catalog)
    #[arg(long, global = true)]
    pub catalog: Option<Utf8PathBuf>,

    /// Debug-level logging, mirrored to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes matching the given filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// List the cuisines available in the catalog
    Cuisines,

    /// Admin explorer: recipes by review status
    Admin {
        /// Review tab: all, pending or approved
        #[arg(long, default_value = "all")]
        tab: AdminTab,

        /// Match against recipe names only
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Search names, cuisines and ingredients
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact cuisine name, e.g. Italian
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// MoMe, Simmr or Both
    #[arg(long)]
    pub device: Option<DeviceSupport>,

    /// Minimum cooking time in minutes
    #[arg(long, default_value_t = crate::models::COOKING_TIME_MIN)]
    pub min_time: u32,

    /// Maximum cooking time in minutes
    #[arg(long, default_value_t = crate::models::COOKING_TIME_MAX)]
    pub max_time: u32,

    /// Easy, Medium or Hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
}

impl ListArgs {
    /// Translate flags into a filter state. Times snap to the slider step and
    /// are clamped into the slider bounds.
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            search_query: self.search.clone(),
            selected_cuisine: self.cuisine.clone(),
            selected_device: self.device,
            cooking_time_range: CookingTimeRange::snapped(self.min_time, self.max_time),
            difficulty: self.difficulty,
        }
    }
}

/// Run `list` against a session and return the rendered output.
pub fn run_list(session: &mut FilterSession, args: &ListArgs) -> String {
    let state = args.to_filter_state();
    session.update(|current| *current = state);
    render::listing(session)
}

/// Run `cuisines` and return the rendered output.
pub fn run_cuisines(session: &FilterSession) -> String {
    render::cuisines(&session.catalog().cuisines())
}

/// Run `admin` and return the rendered output.
pub fn run_admin(session: &FilterSession, tab: AdminTab, search: &str) -> String {
    let query = AdminQuery::new(tab, search);
    let visible = filter_admin_recipes(session.catalog().recipes(), &query);
    render::admin_listing(&query, &visible, session.catalog().len())
}
