//! Error types for the country catalog
//!
//! Provides a unified error type for store and workflow operations, plus the
//! validation error raised for user-supplied text.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Data Errors
    // -------------------------------------------------------------------------
    /// A persisted row could not be turned into a country
    #[error("Parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Workflow Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Country not found: {0}")]
    CountryNotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for failures coming from the backing file (I/O, CSV framing, parsing)
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CatalogError::Io(_) | CatalogError::Csv(_) | CatalogError::Parse(_)
        )
    }
}

/// Rejection of a raw text token before anything touches storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the name cannot be empty")]
    EmptyName,

    #[error("the country '{0}' already exists in the catalog")]
    DuplicateName(String),

    #[error("invalid population '{0}': must be a positive integer")]
    InvalidPopulation(String),

    #[error("invalid area '{0}': must be a positive integer")]
    InvalidArea(String),

    #[error("the continent cannot be empty")]
    EmptyContinent,

    #[error("unknown continent '{0}': expected America, Europe, Asia, Africa or Oceania")]
    UnknownContinent(String),

    #[error("invalid quantity '{0}': must be a positive integer")]
    InvalidCount(String),

    #[error("invalid bound '{0}': must be a non-negative integer")]
    InvalidBound(String),

    #[error("the minimum ({low}) cannot be greater than the maximum ({high})")]
    InvertedRange { low: u64, high: u64 },
}
