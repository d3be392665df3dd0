//! Per-continent counts

/// Continent → count, ordered by first appearance
///
/// Keys are compared byte for byte: `Europe` and `europe` are separate
/// entries if both spellings exist in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinentTally {
    entries: Vec<(String, usize)>,
}

impl ContinentTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more country on `continent`
    pub fn add(&mut self, continent: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == continent) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((continent.to_string(), 1)),
        }
    }

    pub fn get(&self, continent: &str) -> usize {
        self.entries
            .iter()
            .find(|(name, _)| name == continent)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ContinentTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for continent in iter {
            tally.add(continent);
        }
        tally
    }
}
