//! Predicate filters

use crate::model::{Country, RangeField};

/// Countries whose stored continent equals `continent`, ignoring case
pub fn filter_by_continent<'a>(countries: &'a [Country], continent: &str) -> Vec<&'a Country> {
    let wanted = continent.to_lowercase();
    countries
        .iter()
        .filter(|c| c.continent.to_lowercase() == wanted)
        .collect()
}

/// Countries with `low <= field <= high`
///
/// Bounds are taken as given: an inverted range simply matches nothing.
pub fn filter_by_range(
    countries: &[Country],
    field: RangeField,
    low: u64,
    high: u64,
) -> Vec<&Country> {
    countries
        .iter()
        .filter(|c| (low..=high).contains(&field.value_of(c)))
        .collect()
}
