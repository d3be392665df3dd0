//! Name search

use crate::model::Country;

/// First country whose name matches `name` case-insensitively
pub fn find_exact<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    countries.iter().find(|c| c.has_name(name))
}

/// Mutable variant of [`find_exact`], used by the update workflow
pub fn find_exact_mut<'a>(countries: &'a mut [Country], name: &str) -> Option<&'a mut Country> {
    countries.iter_mut().find(|c| c.has_name(name))
}

/// Every country whose name equals or contains `text`, ignoring case
///
/// An empty `text` is contained in every name and therefore matches all.
pub fn find_matching<'a>(countries: &'a [Country], text: &str) -> Vec<&'a Country> {
    let needle = text.to_lowercase();
    countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}
