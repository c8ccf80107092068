//! Admin recipe explorer filter.
//!
//! The moderation view splits recipes into review tabs and offers a name-only
//! search box.

use std::fmt;
use std::str::FromStr;

use crate::models::{FilterError, Recipe, ReviewStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    All,
    PendingApproval,
    Approved,
}

impl AdminTab {
    pub fn accepts(&self, status: ReviewStatus) -> bool {
        match self {
            AdminTab::All => true,
            AdminTab::PendingApproval => status == ReviewStatus::Pending,
            AdminTab::Approved => status == ReviewStatus::Approved,
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            AdminTab::All => "all",
            AdminTab::PendingApproval => "pending",
            AdminTab::Approved => "approved",
        })
    }
}

impl FromStr for AdminTab {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AdminTab::All),
            "pending" | "pending-approval" => Ok(AdminTab::PendingApproval),
            "approved" => Ok(AdminTab::Approved),
            other => Err(FilterError::UnknownTab(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminQuery {
    pub tab: AdminTab,
    pub search_query: String,
}

impl AdminQuery {
    pub fn new(tab: AdminTab, search_query: impl Into<String>) -> Self {
        Self {
            tab,
            search_query: search_query.into(),
        }
    }
}

/// Recipes shown in the admin explorer, in catalog order.
///
/// Unlike the public filter, the search here looks at the recipe name only.
pub fn filter_admin_recipes<'r>(recipes: &'r [Recipe], query: &AdminQuery) -> Vec<&'r Recipe> {
    let query_lower = query.search_query.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| query.tab.accepts(recipe.status))
        .filter(|recipe| {
            query_lower.is_empty() || recipe.name.to_lowercase().contains(&query_lower)
        })
        .collect()
}
