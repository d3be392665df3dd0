//! CSV-backed country store
//!
//! Every call opens the file, reads or writes it completely, and closes it
//! before returning.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::model::Country;

/// Outcome of a fail-soft load
///
/// When `error` is set, `countries` is always empty: a partially read file is
/// never handed out.
#[derive(Debug)]
pub struct LoadReport {
    pub countries: Vec<Country>,
    pub error: Option<CatalogError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the diagnostic and keep the (possibly empty) collection
    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }
}

/// Reads and writes the catalog file described by a [`Config`]
#[derive(Debug, Clone)]
pub struct CountryStore {
    config: Config,
}

/// Column positions of the configured fields in the file header
struct Columns {
    name: usize,
    population: usize,
    area: usize,
    continent: usize,
}

impl CountryStore {
    /// Build a store; nothing is touched on disk until the first operation
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create the file with only the header row if it does not exist
    pub fn ensure_exists(&self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = self.writer(file);
        writer.write_record(self.config.fields.header())?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), "created catalog file");
        Ok(())
    }

    /// Load every country, degrading to an empty collection on any failure
    pub fn load_all(&self) -> LoadReport {
        match self.try_load_all() {
            Ok(countries) => LoadReport {
                countries,
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    path = %self.path().display(),
                    error = %e,
                    "failed to load catalog, continuing with an empty collection"
                );
                LoadReport {
                    countries: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }

    /// Load every country, failing on the first unreadable row
    pub fn try_load_all(&self) -> Result<Vec<Country>> {
        self.ensure_exists()?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .from_path(self.path())?;

        let headers = reader.headers()?.clone();

        // A zero-byte file has no header and no rows
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let columns = self.locate_columns(&headers)?;

        let mut countries = Vec::new();
        for record in reader.records() {
            let record = record?;
            countries.push(self.parse_row(&record, &columns)?);
        }

        tracing::debug!(
            path = %self.path().display(),
            count = countries.len(),
            "loaded catalog"
        );
        Ok(countries)
    }

    /// Append one row, leaving existing content untouched
    pub fn append_one(&self, country: &Country) -> Result<()> {
        self.ensure_exists()?;

        let file = OpenOptions::new().append(true).open(self.path())?;
        let mut writer = self.writer(file);
        write_row(&mut writer, country)?;
        writer.flush()?;

        tracing::debug!(name = %country.name, "appended country");
        Ok(())
    }

    /// Replace the file with the header followed by `countries` in order
    pub fn save_all(&self, countries: &[Country]) -> Result<()> {
        self.ensure_exists()?;

        let file = File::create(self.path())?;
        let mut writer = self.writer(file);
        writer.write_record(self.config.fields.header())?;
        for country in countries {
            write_row(&mut writer, country)?;
        }
        writer.flush()?;

        tracing::debug!(count = countries.len(), "rewrote catalog");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn writer<W: Write>(&self, sink: W) -> csv::Writer<W> {
        WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .terminator(Terminator::CRLF)
            .has_headers(false)
            .from_writer(sink)
    }

    /// Columns are found by header name, so their on-disk order is free
    fn locate_columns(&self, headers: &StringRecord) -> Result<Columns> {
        let find = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                CatalogError::Parse(format!("missing column '{}' in header", name))
            })
        };

        let fields = &self.config.fields;
        Ok(Columns {
            name: find(&fields.name)?,
            population: find(&fields.population)?,
            area: find(&fields.area)?,
            continent: find(&fields.continent)?,
        })
    }

    fn parse_row(&self, record: &StringRecord, columns: &Columns) -> Result<Country> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields = &self.config.fields;

        let cell = |index: usize, field: &str| {
            record.get(index).ok_or_else(|| {
                CatalogError::Parse(format!("line {}: missing value for {}", line, field))
            })
        };
        let number = |index: usize, field: &str| -> Result<u64> {
            let raw = cell(index, field)?;
            raw.trim().parse().map_err(|e| {
                CatalogError::Parse(format!(
                    "line {}: invalid {} '{}': {}",
                    line, field, raw, e
                ))
            })
        };

        Ok(Country {
            name: cell(columns.name, &fields.name)?.to_string(),
            population: number(columns.population, &fields.population)?,
            area: number(columns.area, &fields.area)?,
            continent: cell(columns.continent, &fields.continent)?.to_string(),
        })
    }
}

/// `Country` field order matches the header order
fn write_row<W: Write>(writer: &mut csv::Writer<W>, country: &Country) -> Result<()> {
    writer.serialize(country)?;
    Ok(())
}
