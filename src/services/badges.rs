//! Active-filter badges.
//!
//! Computes which filter dimensions differ from their defaults so a front end
//! can show each one as a removable badge. Rendering lives with the front end
//! (see [`crate::cli::render`]).

use crate::models::{FilterField, FilterState};

/// A single non-default filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub field: FilterField,
    pub label: String,
}

impl ActiveFilter {
    /// The state that results from removing this badge: `state` with only
    /// this badge's field reset.
    pub fn clear(&self, state: &FilterState) -> FilterState {
        state.cleared(self.field)
    }
}

/// One badge per active field, in display order: cuisine, device,
/// difficulty, cooking time, search.
pub fn active_filters(state: &FilterState) -> Vec<ActiveFilter> {
    let mut badges = Vec::new();

    if let Some(cuisine) = &state.selected_cuisine {
        badges.push(ActiveFilter {
            field: FilterField::Cuisine,
            label: cuisine.clone(),
        });
    }

    if let Some(device) = state.selected_device {
        badges.push(ActiveFilter {
            field: FilterField::Device,
            label: device.to_string(),
        });
    }

    if let Some(difficulty) = state.difficulty {
        badges.push(ActiveFilter {
            field: FilterField::Difficulty,
            label: difficulty.to_string(),
        });
    }

    if state.cooking_time_range.is_narrowed() {
        badges.push(ActiveFilter {
            field: FilterField::CookingTime,
            label: format!(
                "{}-{} min",
                state.cooking_time_range.min, state.cooking_time_range.max
            ),
        });
    }

    if !state.search_query.is_empty() {
        badges.push(ActiveFilter {
            field: FilterField::Search,
            label: format!("Search: {}", state.search_query),
        });
    }

    badges
}
