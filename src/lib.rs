//! # Country Catalog
//!
//! A single-user record manager for a flat catalog of countries with:
//! - A CSV file store (fail-soft reads, fail-hard writes)
//! - Exact and substring search, continent and range filters
//! - Ordering by name, population or area in either direction
//! - Aggregate statistics (extremes, averages, per-continent counts)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Presentation (CLI / interactive menu)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw text
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Catalog                               │
//! │        (validate → load → query/mutate → persist)            │
//! └──────┬──────────────┬──────────────┬───────────────┬────────┘
//!        │              │              │               │
//!        ▼              ▼              ▼               ▼
//!  ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌─────────────┐
//!  │ Validate │   │  Query   │   │  Stats   │   │   Storage   │
//!  │  (pure)  │   │ (scans)  │   │ (folds)  │   │   (CSV)     │
//!  └──────────┘   └──────────┘   └──────────┘   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod validate;
pub mod storage;
pub mod query;
pub mod stats;
pub mod catalog;

pub mod render;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result, ValidationError};
pub use config::Config;
pub use catalog::Catalog;
pub use model::{Continent, Country, RangeField, SortField};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
