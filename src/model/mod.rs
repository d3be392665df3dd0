//! Model Module
//!
//! In-memory representation of catalog entries.
//!
//! ## Responsibilities
//! - Fixed-shape `Country` record with typed fields
//! - The enumerated `Continent` set accepted at insertion time
//! - Field selectors used by sorting and range filtering
//!
//! A loaded catalog is a plain `Vec<Country>` in file order. It is never
//! indexed: every query is a linear scan.

mod country;
mod continent;

pub use country::{capitalize, Country};
pub use continent::Continent;

/// Columns a collection can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Population,
    Area,
}

/// Numeric columns usable in an inclusive range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Population,
    Area,
}

impl RangeField {
    /// Read the selected numeric field from a country
    pub fn value_of(self, country: &Country) -> u64 {
        match self {
            RangeField::Population => country.population,
            RangeField::Area => country.area,
        }
    }
}
