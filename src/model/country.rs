//! Country record

use serde::Serialize;

/// One catalog entry
///
/// Serialized as one CSV row: name, population, area, continent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Display name; unique within a catalog, compared case-insensitively
    pub name: String,

    /// Inhabitants
    pub population: u64,

    /// Surface in km²
    pub area: u64,

    /// Continent exactly as stored. Loading does not re-validate it, so this
    /// stays text rather than a `Continent`.
    pub continent: String,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            continent: continent.into(),
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Name as shown in listings
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Continent as shown in listings
    pub fn display_continent(&self) -> String {
        capitalize(&self.continent)
    }
}

/// Upper-case the first character and lower-case the rest
///
/// `"new ZEALAND"` → `"New zealand"`
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
