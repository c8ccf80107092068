use crate::models::Recipe;
use crate::services::AdminQuery;
use crate::state::FilterSession;

/// One line per recipe: name, cuisine, time, difficulty, device.
pub fn recipe_line(recipe: &Recipe) -> String {
    let cuisine = if recipe.cuisine.is_empty() {
        "-"
    } else {
        recipe.cuisine.as_str()
    };

    format!(
        "{:<28} {:<10} {:>4} min  {:<6}  {}",
        recipe.name,
        cuisine,
        recipe.cooking_time,
        recipe.difficulty.map_or("-", |d| d.as_str()),
        recipe.device_support.map_or("-", |d| d.as_str()),
    )
}

/// Badges, counts and the visible recipes of a session.
pub fn listing(session: &FilterSession) -> String {
    let mut lines = Vec::new();

    let badges = session.active_filters();
    if !badges.is_empty() {
        let rendered: Vec<String> = badges.iter().map(|b| format!("[{} ×]", b.label)).collect();
        lines.push(format!("Active filters: {}", rendered.join(" ")));
    }

    let summary = session.summary();
    lines.push(summary.to_string());
    lines.push(String::new());

    if summary.is_empty() {
        lines.push("No recipes found".to_string());
        lines.push("Try adjusting your filters or search query".to_string());
    } else {
        lines.extend(session.visible().into_iter().map(recipe_line));
    }

    to_output(lines)
}

pub fn cuisines(cuisines: &[&str]) -> String {
    let lines = std::iter::once("All")
        .chain(cuisines.iter().copied())
        .map(str::to_string)
        .collect();
    to_output(lines)
}

pub fn admin_listing(query: &AdminQuery, visible: &[&Recipe], total: usize) -> String {
    let mut lines = vec![
        format!("Tab: {} ({} of {} recipes)", query.tab, visible.len(), total),
        String::new(),
    ];

    if visible.is_empty() {
        lines.push("No recipes found".to_string());
    } else {
        lines.extend(
            visible
                .iter()
                .map(|recipe| format!("{:<9} {}", recipe.status, recipe_line(recipe))),
        );
    }

    to_output(lines)
}

/// One line per entry, each newline-terminated.
fn to_output(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
