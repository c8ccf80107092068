//! Integration tests for FilterSession with change events
//!
//! These tests verify that FilterSession correctly:
//! - Reports field changes in badge order
//! - Reports result-count changes only when the count moves
//! - Keeps badges, summary and visible recipes consistent
//! - Can be handed to another thread as a whole

use qzene::models::FilterField;
use qzene::services::{BundledCatalog, Catalog};
use qzene::{DeviceSupport, Difficulty, FilterChange, FilterSession, FilterState};
use std::thread;

fn bundled_session() -> FilterSession {
    FilterSession::new(Catalog::load_from(&BundledCatalog).unwrap().catalog)
}

#[test]
fn test_change_events_emitted() {
    let mut session = bundled_session();

    let changes = session.select_cuisine(Some("Japanese".to_string()));

    assert!(
        matches!(&changes[0], FilterChange::CuisineChanged { cuisine: Some(c) } if c == "Japanese"),
        "Expected CuisineChanged event, got: {:?}",
        changes
    );
    assert!(
        matches!(changes.last(), Some(FilterChange::ResultsChanged { .. })),
        "Expected ResultsChanged event, got: {:?}",
        changes
    );
}

#[test]
fn test_events_follow_badge_order() {
    let mut session = bundled_session();

    let changes = session.update(|state| {
        *state = FilterState::new()
            .with_search("chicken")
            .with_difficulty(Difficulty::Easy)
            .with_device(DeviceSupport::MoMe)
            .with_cuisine("Japanese");
    });

    let kinds: Vec<&str> = changes
        .iter()
        .map(|change| match change {
            FilterChange::CuisineChanged { .. } => "cuisine",
            FilterChange::DeviceChanged { .. } => "device",
            FilterChange::DifficultyChanged { .. } => "difficulty",
            FilterChange::CookingTimeChanged { .. } => "time",
            FilterChange::SearchChanged { .. } => "search",
            FilterChange::ResultsChanged { .. } => "results",
            FilterChange::FiltersReset => "reset",
        })
        .collect();

    assert_eq!(kinds, vec!["cuisine", "device", "difficulty", "search", "results"]);
}

#[test]
fn test_badges_match_session_state() {
    let mut session = bundled_session();
    session.select_device(Some(DeviceSupport::Simmr));
    session.set_cooking_time_range(30, 120);

    let labels: Vec<String> = session
        .active_filters()
        .into_iter()
        .map(|badge| badge.label)
        .collect();
    assert_eq!(labels, vec!["Simmr", "30-120 min"]);

    for recipe in session.visible() {
        assert!(recipe.cooking_time >= 30);
        assert!(matches!(
            recipe.device_support,
            Some(DeviceSupport::Simmr | DeviceSupport::Both)
        ));
    }
}

#[test]
fn test_summary_tracks_visible_count() {
    let mut session = bundled_session();
    let total = session.catalog().len();

    let steps: [fn(&mut FilterSession) -> Vec<FilterChange>; 5] = [
        |s| s.set_search_query("tomato"),
        |s| s.select_difficulty(Some(Difficulty::Easy)),
        |s| s.clear_filter(FilterField::Search),
        |s| s.set_cooking_time_range(0, 15),
        |s| s.reset_filters(),
    ];

    for step in steps {
        step(&mut session);
        let summary = session.summary();
        assert_eq!(summary.showing, session.visible().len());
        assert_eq!(summary.total, total);
    }

    assert_eq!(session.summary().showing, total);
}

#[test]
fn test_reset_reports_every_changed_field() {
    let mut session = bundled_session();
    session.select_cuisine(Some("French".to_string()));
    session.set_search_query("wine");

    let changes = session.reset_filters();

    assert!(changes.contains(&FilterChange::CuisineChanged { cuisine: None }));
    assert!(changes.contains(&FilterChange::SearchChanged {
        query: String::new()
    }));
    assert_eq!(changes.last(), Some(&FilterChange::FiltersReset));
    assert!(session.active_filters().is_empty());
}

#[test]
fn test_reset_on_default_state_only_reports_reset() {
    let mut session = bundled_session();
    assert_eq!(session.reset_filters(), vec![FilterChange::FiltersReset]);
}

#[test]
fn test_session_moves_across_threads() {
    let mut session = bundled_session();
    session.select_cuisine(Some("Italian".to_string()));

    let handle = thread::spawn(move || {
        session.select_difficulty(Some(Difficulty::Hard));
        session
    });

    let session = handle.join().unwrap();
    let names: Vec<&str> = session.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Osso Buco"]);
}
