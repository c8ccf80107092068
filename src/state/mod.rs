// Filter session module
//
// FilterSession owns the catalog and the FilterState of one recipe view and
// reports what changed after every mutation so a front end can redraw only
// what it needs to.

use crate::models::{CookingTimeRange, DeviceSupport, Difficulty, FilterField, FilterState, Recipe};
use crate::services::{
    ActiveFilter, Catalog, FilterSummary, active_filters, filter_recipes, summarize,
};

/// Change events reported by [`FilterSession`] mutations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    SearchChanged {
        query: String,
    },

    CuisineChanged {
        cuisine: Option<String>,
    },

    DeviceChanged {
        device: Option<DeviceSupport>,
    },

    CookingTimeChanged {
        range: CookingTimeRange,
    },

    DifficultyChanged {
        difficulty: Option<Difficulty>,
    },

    /// The number of visible recipes changed
    ResultsChanged {
        showing: usize,
        total: usize,
    },

    /// Every filter was reset at once
    FiltersReset,
}

/// One recipe view: a catalog plus the filters applied to it.
///
/// The session is owned by whatever drives the view and is mutated through
/// `&mut self`; there is no shared or global state. Dropping the session
/// discards its filters.
///
/// # Usage
///
/// - [`update()`](Self::update) for arbitrary mutations with change detection
/// - the `set_*`/`select_*` helpers for single-field changes
/// - [`visible()`](Self::visible), [`summary()`](Self::summary) and
///   [`active_filters()`](Self::active_filters) for rendering
#[derive(Debug, Clone)]
pub struct FilterSession {
    catalog: Catalog,
    state: FilterState,
    showing: usize,
}

impl FilterSession {
    /// Start a session with default filters.
    pub fn new(catalog: Catalog) -> Self {
        let showing = catalog.len();
        Self {
            catalog,
            state: FilterState::default(),
            showing,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recipes visible under the current filters, in catalog order.
    pub fn visible(&self) -> Vec<&Recipe> {
        filter_recipes(self.catalog.recipes(), &self.state)
    }

    pub fn summary(&self) -> FilterSummary {
        summarize(self.showing, self.catalog.len())
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        active_filters(&self.state)
    }

    /// Apply `update_fn` to the filters and report what changed.
    ///
    /// Field events come first, in badge order, followed by
    /// [`FilterChange::ResultsChanged`] when the visible count moved.
    pub fn update<F>(&mut self, update_fn: F) -> Vec<FilterChange>
    where
        F: FnOnce(&mut FilterState),
    {
        let old_state = self.state.clone();

        update_fn(&mut self.state);

        let mut changes = self.detect_changes(&old_state);

        let showing = self.visible().len();
        if showing != self.showing {
            self.showing = showing;
            changes.push(FilterChange::ResultsChanged {
                showing,
                total: self.catalog.len(),
            });
        }

        if !changes.is_empty() {
            tracing::debug!("Filter session update: {:?}", changes);
        }

        changes
    }

    fn detect_changes(&self, old: &FilterState) -> Vec<FilterChange> {
        let new = &self.state;
        let mut changes = Vec::new();

        if old.selected_cuisine != new.selected_cuisine {
            changes.push(FilterChange::CuisineChanged {
                cuisine: new.selected_cuisine.clone(),
            });
        }

        if old.selected_device != new.selected_device {
            changes.push(FilterChange::DeviceChanged {
                device: new.selected_device,
            });
        }

        if old.difficulty != new.difficulty {
            changes.push(FilterChange::DifficultyChanged {
                difficulty: new.difficulty,
            });
        }

        if old.cooking_time_range != new.cooking_time_range {
            changes.push(FilterChange::CookingTimeChanged {
                range: new.cooking_time_range,
            });
        }

        if old.search_query != new.search_query {
            changes.push(FilterChange::SearchChanged {
                query: new.search_query.clone(),
            });
        }

        changes
    }

    // Convenience methods for single-field updates

    pub fn set_search_query(&mut self, query: impl Into<String>) -> Vec<FilterChange> {
        let query = query.into();
        self.update(|state| state.search_query = query)
    }

    pub fn select_cuisine(&mut self, cuisine: Option<String>) -> Vec<FilterChange> {
        self.update(|state| state.selected_cuisine = cuisine)
    }

    pub fn select_device(&mut self, device: Option<DeviceSupport>) -> Vec<FilterChange> {
        self.update(|state| state.selected_device = device)
    }

    /// Set the cooking-time window from raw slider values.
    ///
    /// Values are clamped into the slider bounds and ordered, so the engine
    /// always sees a valid range.
    pub fn set_cooking_time_range(&mut self, a: u32, b: u32) -> Vec<FilterChange> {
        let range = CookingTimeRange::clamped(a, b);
        self.update(|state| state.cooking_time_range = range)
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) -> Vec<FilterChange> {
        self.update(|state| state.difficulty = difficulty)
    }

    /// Remove one badge.
    pub fn clear_filter(&mut self, field: FilterField) -> Vec<FilterChange> {
        self.update(|state| state.clear_field(field))
    }

    /// "Reset All" / "Clear All".
    pub fn reset_filters(&mut self) -> Vec<FilterChange> {
        let mut changes = self.update(FilterState::reset);
        changes.push(FilterChange::FiltersReset);
        changes
    }
}
