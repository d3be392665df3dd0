//! Continent enumeration

use std::fmt;

/// The continents accepted when a country is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    America,
    Europe,
    Asia,
    Africa,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::America,
        Continent::Europe,
        Continent::Asia,
        Continent::Africa,
        Continent::Oceania,
    ];

    /// Case-insensitive lookup; surrounding whitespace is ignored
    ///
    /// `Europa` is accepted as an alias, since older catalog files use it.
    pub fn parse(text: &str) -> Option<Continent> {
        let wanted = text.trim();
        if wanted.eq_ignore_ascii_case("europa") {
            return Some(Continent::Europe);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Capitalized form written to the store
    pub fn as_str(self) -> &'static str {
        match self {
            Continent::America => "America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
