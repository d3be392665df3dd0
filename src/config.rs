//! Configuration for the country catalog
//!
//! Centralized configuration with sensible defaults. Every store is built from
//! one of these, so tests can point independent stores at isolated files.

use std::path::PathBuf;

use crate::error::{CatalogError, Result};

/// Main configuration for a catalog instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the CSV file holding the catalog
    pub data_file: PathBuf,

    /// Field delimiter byte (comma by default)
    pub delimiter: u8,

    /// Header names, in on-disk column order
    pub fields: FieldNames,
}

/// Header names of the four persisted columns
///
/// Field order and spelling are part of the file compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub name: String,
    pub population: String,
    pub area: String,
    pub continent: String,
}

impl FieldNames {
    /// Header row in on-disk order
    pub fn header(&self) -> [&str; 4] {
        [&self.name, &self.population, &self.area, &self.continent]
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            name: "NOMBRE".to_string(),
            population: "POBLACION".to_string(),
            area: "SUPERFICIE".to_string(),
            continent: "CONTINENTE".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("gestion.paises.csv"),
            delimiter: b',',
            fields: FieldNames::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings a store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CatalogError::Config("data file path is empty".to_string()));
        }

        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(CatalogError::Config(format!(
                "delimiter {:?} clashes with CSV quoting or line endings",
                self.delimiter as char
            )));
        }

        let header = self.fields.header();
        for (i, name) in header.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CatalogError::Config(format!("field name #{} is empty", i + 1)));
            }
            if header[..i].contains(name) {
                return Err(CatalogError::Config(format!("duplicate field name '{}'", name)));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the CSV file backing the catalog
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the header names
    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.config.fields = fields;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
