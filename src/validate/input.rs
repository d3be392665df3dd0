//! Raw insertion input
//!
//! Validates the four text fields of a new country in the order they are
//! collected, stopping at the first failure.

use crate::error::ValidationError;
use crate::model::{capitalize, Country};
use crate::query::find_exact;

use super::{parse_continent, parse_positive, require_name};

/// Text collected for one new country, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryInput {
    pub name: String,
    pub population: String,
    pub area: String,
    pub continent: String,
}

impl CountryInput {
    pub fn new(
        name: impl Into<String>,
        population: impl Into<String>,
        area: impl Into<String>,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population: population.into(),
            area: area.into(),
            continent: continent.into(),
        }
    }

    /// Validate against the collection the country would join
    ///
    /// Checks run name → duplicate → population → area → continent. On
    /// success the returned record has its name and continent capitalized.
    pub fn validate(&self, existing: &[Country]) -> Result<Country, ValidationError> {
        let name = check_new_name(&self.name, existing)?;
        let population = parse_positive(self.population.trim(), ValidationError::InvalidPopulation)?;
        let area = parse_positive(self.area.trim(), ValidationError::InvalidArea)?;
        let continent = parse_continent(&self.continent)?;

        Ok(Country::new(
            capitalize(&name),
            population,
            area,
            continent.as_str(),
        ))
    }
}

/// Trimmed name that is non-empty and not already in `existing`
pub fn check_new_name(text: &str, existing: &[Country]) -> Result<String, ValidationError> {
    let name = require_name(text)?;
    if find_exact(existing, name).is_some() {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }
    Ok(name.to_string())
}
