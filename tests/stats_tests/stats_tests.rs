//! Tests for the Statistics Engine
//!
//! These tests verify:
//! - Extremes with first-occurrence tie breaking
//! - Averages
//! - Per-continent tallies that preserve stored spelling
//! - Empty collections yield nothing

use country_catalog::model::Country;
use country_catalog::render::{group_thousands, group_thousands_f64, render_statistics};
use country_catalog::stats::{averages, counts_by_continent, extremes, CatalogStats, ContinentTally};

// =============================================================================
// Helper Functions
// =============================================================================

fn country(name: &str, population: u64, area: u64, continent: &str) -> Country {
    Country::new(name, population, area, continent)
}

// =============================================================================
// Extremes Tests
// =============================================================================

#[test]
fn test_extremes_pick_first_on_ties() {
    let countries = vec![
        country("Small", 10, 1, "Asia"),
        country("BigFirst", 90, 1, "Asia"),
        country("BigSecond", 90, 1, "Asia"),
    ];

    let result = extremes(&countries).unwrap();

    assert_eq!(result.max_population.name, "BigFirst");
    assert_eq!(result.max_population.population, 90);
    assert_eq!(result.min_population.name, "Small");
}

#[test]
fn test_extremes_single_country_is_both() {
    let countries = vec![country("Peru", 30, 1, "America")];

    let result = extremes(&countries).unwrap();

    assert_eq!(result.max_population, result.min_population);
}

#[test]
fn test_min_tie_keeps_first() {
    let countries = vec![
        country("A", 5, 1, "Asia"),
        country("B", 7, 1, "Asia"),
        country("C", 5, 1, "Asia"),
    ];

    assert_eq!(extremes(&countries).unwrap().min_population.name, "A");
}

// =============================================================================
// Averages Tests
// =============================================================================

#[test]
fn test_averages() {
    let countries = vec![
        country("A", 10, 100, "Asia"),
        country("B", 20, 200, "Asia"),
        country("C", 35, 301, "Asia"),
    ];

    let avg = averages(&countries).unwrap();

    assert!((avg.population - 65.0 / 3.0).abs() < 1e-9);
    assert!((avg.area - 601.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_averages_do_not_overflow() {
    let countries = vec![country("A", u64::MAX, 1, "Asia"), country("B", u64::MAX, 1, "Asia")];

    let avg = averages(&countries).unwrap();

    assert!((avg.population - u64::MAX as f64).abs() / (u64::MAX as f64) < 1e-9);
}

// =============================================================================
// Tally Tests
// =============================================================================

#[test]
fn test_counts_by_continent_in_first_seen_order() {
    let countries = vec![
        country("A", 1, 1, "Europe"),
        country("B", 1, 1, "Asia"),
        country("C", 1, 1, "Europe"),
    ];

    let tally = counts_by_continent(&countries);

    assert_eq!(tally.iter().collect::<Vec<_>>(), vec![("Europe", 2), ("Asia", 1)]);
}

#[test]
fn test_counts_keep_stored_case_separate() {
    let countries = vec![country("A", 1, 1, "Europe"), country("B", 1, 1, "europe")];

    let tally = counts_by_continent(&countries);

    assert_eq!(tally.len(), 2);
    assert_eq!(tally.get("Europe"), 1);
    assert_eq!(tally.get("europe"), 1);
    assert_eq!(tally.get("Asia"), 0);
}

#[test]
fn test_tally_from_iterator() {
    let tally: ContinentTally = ["Asia", "Asia", "Africa"].into_iter().collect();

    assert_eq!(tally.get("Asia"), 2);
    assert!(!tally.is_empty());
}

// =============================================================================
// CatalogStats Tests
// =============================================================================

#[test]
fn test_empty_collection_has_no_stats() {
    assert!(CatalogStats::compute(&[]).is_none());
    assert!(extremes(&[]).is_none());
    assert!(averages(&[]).is_none());
    assert!(counts_by_continent(&[]).is_empty());
}

#[test]
fn test_render_statistics_report() {
    let countries = vec![
        country("Argentina", 45_000_000, 2_780_400, "America"),
        country("Peru", 33_000_000, 1_285_216, "America"),
    ];

    let stats = CatalogStats::compute(&countries).unwrap();
    let report = render_statistics(&stats);

    assert!(report.contains("- Most populated country: Argentina (45,000,000 inhabitants)"));
    assert!(report.contains("- Least populated country: Peru (33,000,000 inhabitants)"));
    assert!(report.contains("- Average population: 39,000,000.00 inhabitants"));
    assert!(report.contains("- Average area: 2,032,808.00 km²"));
    assert!(report.contains("- America: 2 countries"));
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands_f64(1234.5), "1,234.50");
    assert_eq!(group_thousands_f64(0.5), "0.50");
}
