//! Render Module
//!
//! Text output for the presentation layer.
//!
//! ## Table Layout
//! ```text
//! NOMBRE                     POBLACION   SUPERFICIE(km²)   CONTINENTE
//! ----------------------------------------------------------------------
//! Argentina                   45000000           2780400      America
//! ```
//! Name is left-aligned to 25 characters, population right-aligned to 10,
//! area to 17 and continent to 12. Name and continent are capitalized.

mod number;

pub use number::{group_thousands, group_thousands_f64};

use std::fmt::Write;

use crate::config::FieldNames;
use crate::model::Country;
use crate::stats::CatalogStats;

/// Message shown instead of an empty table
pub const NO_RESULTS: &str = "No results found.";

/// Width of the horizontal rule under headers
pub const RULE_WIDTH: usize = 70;

/// Horizontal rule
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Table of countries with a header row, or [`NO_RESULTS`] when empty
pub fn render_country_table(countries: &[Country], fields: &FieldNames) -> String {
    if countries.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let mut out = String::new();
    let area_header = format!("{}(km²)", fields.area);
    let _ = writeln!(
        out,
        "{:<25} {:>10} {:>17} {:>12}",
        fields.name, fields.population, area_header, fields.continent
    );
    let _ = writeln!(out, "{}", rule());

    for country in countries {
        let _ = writeln!(
            out,
            "{:<25} {:>10} {:>17} {:>12}",
            country.display_name(),
            country.population,
            country.area,
            country.display_continent()
        );
    }

    out
}

/// Human-readable statistics report
pub fn render_statistics(stats: &CatalogStats) -> String {
    let mut out = String::new();
    let max = &stats.extremes.max_population;
    let min = &stats.extremes.min_population;

    let _ = writeln!(out, "LARGEST AND SMALLEST POPULATION:");
    let _ = writeln!(
        out,
        "- Most populated country: {} ({} inhabitants)",
        max.name,
        group_thousands(max.population)
    );
    let _ = writeln!(
        out,
        "- Least populated country: {} ({} inhabitants)",
        min.name,
        group_thousands(min.population)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "AVERAGES:");
    let _ = writeln!(
        out,
        "- Average population: {} inhabitants",
        group_thousands_f64(stats.averages.population)
    );
    let _ = writeln!(
        out,
        "- Average area: {} km²",
        group_thousands_f64(stats.averages.area)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "COUNTRIES PER CONTINENT:");
    for (continent, count) in stats.by_continent.iter() {
        let _ = writeln!(out, "- {}: {} countries", continent, count);
    }

    out
}
