//! Statistics Module
//!
//! Aggregates over a non-empty collection.
//!
//! ## Responsibilities
//! - Country with the largest and smallest population
//! - Mean population and mean area
//! - Number of countries per stored continent
//!
//! Empty collections have no statistics; `CatalogStats::compute` returns
//! `None` for them so callers short-circuit with their own message.

mod tally;

pub use tally::ContinentTally;

use crate::model::Country;

/// Country with the largest / smallest population
///
/// Ties resolve to the first record in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub max_population: Country,
    pub min_population: Country,
}

/// Arithmetic means
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub population: f64,
    pub area: f64,
}

/// Every statistic at once
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub extremes: Extremes,
    pub averages: Averages,
    pub by_continent: ContinentTally,
}

impl CatalogStats {
    pub fn compute(countries: &[Country]) -> Option<Self> {
        Some(Self {
            extremes: extremes(countries)?,
            averages: averages(countries)?,
            by_continent: counts_by_continent(countries),
        })
    }
}

/// First-encountered max and min by population
pub fn extremes(countries: &[Country]) -> Option<Extremes> {
    let (first, rest) = countries.split_first()?;
    let mut max = first;
    let mut min = first;

    // Strict comparisons keep the earliest record on ties
    for country in rest {
        if country.population > max.population {
            max = country;
        }
        if country.population < min.population {
            min = country;
        }
    }

    Some(Extremes {
        max_population: max.clone(),
        min_population: min.clone(),
    })
}

/// Mean population and area
pub fn averages(countries: &[Country]) -> Option<Averages> {
    if countries.is_empty() {
        return None;
    }

    // u128 sums cannot overflow for any realistic catalog size
    let (population, area) = countries.iter().fold((0u128, 0u128), |(p, a), c| {
        (p + u128::from(c.population), a + u128::from(c.area))
    });
    let n = countries.len() as f64;

    Some(Averages {
        population: population as f64 / n,
        area: area as f64 / n,
    })
}

/// Tally by continent exactly as stored
pub fn counts_by_continent(countries: &[Country]) -> ContinentTally {
    countries.iter().map(|c| c.continent.as_str()).collect()
}
