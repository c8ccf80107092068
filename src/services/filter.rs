//! The recipe filter engine.
//!
//! [`filter_recipes`] applies every active predicate of a [`FilterState`]
//! conjunctively and keeps the catalog order. It never fails: a recipe whose
//! fields cannot satisfy a predicate is simply left out.

use std::fmt;

use crate::models::{CookingTimeRange, DeviceSupport, Difficulty, FilterState, Recipe};

/// Text predicate. `query_lower` must already be lowercased.
///
/// An empty query matches everything. Otherwise the query has to appear as a
/// substring of the name, the cuisine, or any single ingredient.
pub fn matches_text(recipe: &Recipe, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    recipe.name.to_lowercase().contains(query_lower)
        || recipe.cuisine.to_lowercase().contains(query_lower)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query_lower))
}

/// Cuisine predicate, exact and case-sensitive.
pub fn matches_cuisine(recipe: &Recipe, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(cuisine) => recipe.cuisine == cuisine,
    }
}

/// Device predicate. See [`DeviceSupport::satisfies`] for the tier rules.
pub fn matches_device(recipe: &Recipe, selected: Option<DeviceSupport>) -> bool {
    match selected {
        None => true,
        Some(device) => recipe
            .device_support
            .is_some_and(|support| support.satisfies(device)),
    }
}

/// Cooking-time predicate, inclusive at both ends.
pub fn matches_cooking_time(recipe: &Recipe, range: CookingTimeRange) -> bool {
    range.contains(recipe.cooking_time)
}

pub fn matches_difficulty(recipe: &Recipe, selected: Option<Difficulty>) -> bool {
    match selected {
        None => true,
        Some(difficulty) => recipe.difficulty == Some(difficulty),
    }
}

/// A [`FilterState`] prepared for repeated matching.
///
/// Lowercases the search query once instead of once per recipe.
#[derive(Debug, Clone)]
pub struct RecipeFilter<'s> {
    state: &'s FilterState,
    query_lower: String,
}

impl<'s> RecipeFilter<'s> {
    pub fn new(state: &'s FilterState) -> Self {
        Self {
            state,
            query_lower: state.search_query.to_lowercase(),
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        matches_text(recipe, &self.query_lower)
            && matches_cuisine(recipe, self.state.selected_cuisine.as_deref())
            && matches_device(recipe, self.state.selected_device)
            && matches_cooking_time(recipe, self.state.cooking_time_range)
            && matches_difficulty(recipe, self.state.difficulty)
    }

    /// Matching recipes from `recipes`, in their original order.
    pub fn apply<'r>(&self, recipes: &'r [Recipe]) -> Vec<&'r Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Return the recipes visible under `state`, preserving catalog order.
pub fn filter_recipes<'r>(recipes: &'r [Recipe], state: &FilterState) -> Vec<&'r Recipe> {
    let visible = RecipeFilter::new(state).apply(recipes);

    tracing::debug!(
        "Filter pass: {} of {} recipes visible (query={:?}, cuisine={:?}, device={:?}, time={}-{}, difficulty={:?})",
        visible.len(),
        recipes.len(),
        state.search_query,
        state.selected_cuisine,
        state.selected_device,
        state.cooking_time_range.min,
        state.cooking_time_range.max,
        state.difficulty
    );

    visible
}

/// The default filter state: empty query, no selections, full time range.
pub fn reset_filters() -> FilterState {
    FilterState::default()
}

/// Counts shown above the result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub showing: usize,
    pub total: usize,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.showing == 0
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} recipes", self.showing, self.total)
    }
}

pub fn summarize(visible: usize, total: usize) -> FilterSummary {
    FilterSummary {
        showing: visible,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewStatus;

    fn recipe(name: &str, cuisine: &str, ingredients: &[&str], minutes: u32) -> Recipe {
        Recipe::new(
            name.to_lowercase().replace(' ', "-"),
            name,
            cuisine,
            ingredients.iter().map(|s| s.to_string()).collect(),
            minutes,
            Difficulty::Easy,
            DeviceSupport::Both,
        )
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("Pasta Pomodoro", "Italian", &["pasta", "tomato", "basil"], 30),
            recipe("Green Curry", "Thai", &["coconut milk", "chicken"], 45),
            recipe("Miso Soup", "Japanese", &["miso", "tofu"], 10),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let recipes = catalog();
        let visible = filter_recipes(&recipes, &FilterState::default());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_text_matches_name_cuisine_and_ingredient() {
        let recipes = catalog();

        let by_name = filter_recipes(&recipes, &FilterState::new().with_search("CURRY"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Green Curry");

        let by_cuisine = filter_recipes(&recipes, &FilterState::new().with_search("japan"));
        assert_eq!(by_cuisine.len(), 1);
        assert_eq!(by_cuisine[0].name, "Miso Soup");

        let by_ingredient = filter_recipes(&recipes, &FilterState::new().with_search("Coconut"));
        assert_eq!(by_ingredient.len(), 1);
        assert_eq!(by_ingredient[0].name, "Green Curry");
    }

    #[test]
    fn test_text_is_substring_not_token() {
        let recipes = catalog();
        let visible = filter_recipes(&recipes, &FilterState::new().with_search("mato"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pasta Pomodoro");
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let recipes = catalog();
        // "Miso Soup" contains "o S", but nothing contains " soup " with a trailing space
        let visible = filter_recipes(&recipes, &FilterState::new().with_search(" soup "));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_missing_cuisine_never_matches_selection() {
        let mut unknown = recipe("Mystery Stew", "", &["beans"], 20);
        unknown.cuisine.clear();

        assert!(!matches_cuisine(&unknown, Some("Italian")));
        assert!(matches_cuisine(&unknown, None));
        assert!(!matches_text(&unknown, "italian"));
    }

    #[test]
    fn test_missing_device_or_difficulty_never_matches_selection() {
        let mut bare = recipe("Toast", "British", &["bread"], 5);
        bare.device_support = None;
        bare.difficulty = None;

        assert!(matches_device(&bare, None));
        assert!(!matches_device(&bare, Some(DeviceSupport::MoMe)));
        assert!(!matches_device(&bare, Some(DeviceSupport::Both)));
        assert!(matches_difficulty(&bare, None));
        assert!(!matches_difficulty(&bare, Some(Difficulty::Easy)));
    }

    #[test]
    fn test_status_does_not_affect_public_filter() {
        let recipes =
            vec![recipe("Draft Dish", "Thai", &[], 15).with_status(ReviewStatus::Pending)];
        assert_eq!(filter_recipes(&recipes, &FilterState::default()).len(), 1);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let recipes = catalog();
        let state = FilterState::new()
            .with_search("o")
            .with_cooking_time(CookingTimeRange::new(0, 30).unwrap());

        let names: Vec<_> = filter_recipes(&recipes, &state)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pasta Pomodoro", "Miso Soup"]);
    }

    #[test]
    fn test_reset_filters_is_default() {
        assert_eq!(reset_filters(), FilterState::default());
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(2, 12);
        assert_eq!(summary.to_string(), "Showing 2 of 12 recipes");
        assert!(!summary.is_empty());
        assert!(summarize(0, 12).is_empty());
    }
}
