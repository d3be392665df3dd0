//! Catalog Module
//!
//! The workflows a presentation layer calls into.
//!
//! ## Responsibilities
//! - Load the collection fresh from the store for every operation
//! - Validate raw text before anything is persisted
//! - Persist inserts one row at a time and updates as a full rewrite
//! - Surface fail-soft load diagnostics next to each result

use std::path::Path;

use crate::config::Config;
use crate::error::{CatalogError, Result, ValidationError};
use crate::model::{Country, RangeField, SortField};
use crate::query;
use crate::stats::CatalogStats;
use crate::storage::{CountryStore, LoadReport};
use crate::validate::{self, CountryInput};

/// A query result plus the load problem it was computed despite, if any
///
/// With `load_error` set the query ran against an empty collection.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub load_error: Option<CatalogError>,
}

/// Entry point for every catalog operation
#[derive(Debug, Clone)]
pub struct Catalog {
    store: CountryStore,
}

impl Catalog {
    /// Open a catalog with the given config
    pub fn open(config: Config) -> Result<Self> {
        let store = CountryStore::open(config)?;
        Ok(Self { store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Fail-soft load of the current collection
    pub fn load(&self) -> LoadReport {
        self.store.load_all()
    }

    /// Every country in file order
    pub fn list(&self) -> Outcome<Vec<Country>> {
        self.query(|countries| countries.to_vec())
    }

    /// Exact, case-insensitive lookup
    pub fn find(&self, name: &str) -> Outcome<Option<Country>> {
        self.query(|countries| query::find_exact(countries, name.trim()).cloned())
    }

    /// Countries whose name equals or contains `text`
    pub fn search(&self, text: &str) -> Outcome<Vec<Country>> {
        self.query(|countries| owned(query::find_matching(countries, text.trim())))
    }

    pub fn filter_by_continent(&self, continent: &str) -> Outcome<Vec<Country>> {
        self.query(|countries| owned(query::filter_by_continent(countries, continent.trim())))
    }

    /// Inclusive range filter over raw bound text
    ///
    /// Bounds are validated before the file is read.
    pub fn filter_by_range(
        &self,
        field: RangeField,
        low: &str,
        high: &str,
    ) -> Result<Outcome<Vec<Country>>> {
        let (low, high) = validate::parse_range(low, high)?;
        Ok(self.query(|countries| owned(query::filter_by_range(countries, field, low, high))))
    }

    /// Sorted copy of the collection
    pub fn sorted(&self, field: SortField, descending: bool) -> Outcome<Vec<Country>> {
        self.query(|countries| query::sort_by(countries, field, descending))
    }

    /// Statistics, or `None` when there is nothing registered
    pub fn statistics(&self) -> Outcome<Option<CatalogStats>> {
        self.query(CatalogStats::compute)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Start an insert session over a freshly loaded collection
    pub fn begin_insert(&self) -> InsertSession<'_> {
        let report = self.store.load_all();
        InsertSession {
            store: &self.store,
            existing: report.countries,
            load_error: report.error,
        }
    }

    /// Insert a batch of countries
    ///
    /// The first record that fails validation abandons the rest of the batch,
    /// including records after it that would have been valid. A record whose
    /// row cannot be written is reported and the batch moves on.
    pub fn insert_batch<I>(&self, inputs: I) -> InsertReport
    where
        I: IntoIterator<Item = CountryInput>,
    {
        let mut session = self.begin_insert();
        let mut report = InsertReport::default();

        for (index, input) in inputs.into_iter().enumerate() {
            match session.insert(&input) {
                Ok(country) => report.inserted.push(country),
                Err(CatalogError::Validation(error)) => {
                    tracing::info!(index, error = %error, "batch abandoned");
                    report.aborted = Some(BatchAbort { index, error });
                    break;
                }
                Err(error) => report.write_failures.push(WriteFailure {
                    name: input.name.trim().to_string(),
                    error,
                }),
            }
        }

        report.load_error = session.load_error;
        report
    }

    /// Replace population and area of the country called `name`
    ///
    /// The whole collection is rewritten. The continent is left as stored.
    pub fn update(&self, name: &str, population: &str, area: &str) -> Result<Country> {
        let mut countries = self.store.load_all().into_countries();
        let name = name.trim();

        let country = query::find_exact_mut(&mut countries, name)
            .ok_or_else(|| CatalogError::CountryNotFound(name.to_string()))?;

        let population =
            validate::parse_positive(population.trim(), ValidationError::InvalidPopulation)?;
        let area = validate::parse_positive(area.trim(), ValidationError::InvalidArea)?;

        country.population = population;
        country.area = area;
        let updated = country.clone();

        self.store.save_all(&countries)?;

        tracing::info!(
            name = %updated.name,
            population,
            area,
            "updated country"
        );
        Ok(updated)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &CountryStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        self.store.config()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn query<T>(&self, f: impl FnOnce(&[Country]) -> T) -> Outcome<T> {
        let report = self.store.load_all();
        Outcome {
            value: f(&report.countries),
            load_error: report.error,
        }
    }
}

fn owned(countries: Vec<&Country>) -> Vec<Country> {
    countries.into_iter().cloned().collect()
}

// =============================================================================
// Insert Session
// =============================================================================

/// A multi-insert session
///
/// Holds the collection loaded when the session started and grows it with
/// every accepted record, so duplicates inside the same batch are caught
/// without reloading the file.
#[derive(Debug)]
pub struct InsertSession<'a> {
    store: &'a CountryStore,
    existing: Vec<Country>,
    load_error: Option<CatalogError>,
}

impl<'a> InsertSession<'a> {
    /// Validate a candidate name on its own (non-empty, not taken)
    pub fn check_name(&self, name: &str) -> std::result::Result<String, ValidationError> {
        validate::check_new_name(name, &self.existing)
    }

    /// Validate and append one country
    ///
    /// The record joins the in-memory collection only once its row is written.
    pub fn insert(&mut self, input: &CountryInput) -> Result<Country> {
        let country = input.validate(&self.existing)?;
        self.store.append_one(&country)?;

        tracing::info!(name = %country.name, "inserted country");
        self.existing.push(country.clone());
        Ok(country)
    }

    /// Collection as seen by this session
    pub fn countries(&self) -> &[Country] {
        &self.existing
    }

    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }
}

/// Result of [`Catalog::insert_batch`]
#[derive(Debug, Default)]
pub struct InsertReport {
    /// Records written, in batch order
    pub inserted: Vec<Country>,

    /// Records that passed validation but could not be written
    pub write_failures: Vec<WriteFailure>,

    /// Validation failure that stopped the batch
    pub aborted: Option<BatchAbort>,

    /// Load problem hidden behind an empty starting collection
    pub load_error: Option<CatalogError>,
}

impl InsertReport {
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none() && self.write_failures.is_empty()
    }
}

#[derive(Debug)]
pub struct WriteFailure {
    pub name: String,
    pub error: CatalogError,
}

/// Position (0-based) and cause of the record that abandoned a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAbort {
    pub index: usize,
    pub error: ValidationError,
}
