//! Storage Module
//!
//! Flat-file persistence for the whole country collection.
//!
//! ## Responsibilities
//! - Create the backing file (header only) when it is missing
//! - Load every row, in file order
//! - Append a single row, or rewrite header + every row
//!
//! ## File Format
//! ```text
//! NOMBRE,POBLACION,SUPERFICIE,CONTINENTE\r\n     <- header, fixed order
//! Argentina,45000000,2780400,America\r\n         <- one row per country
//! Peru,33000000,1285216,America\r\n
//! ```
//! UTF-8, standard CSV quoting, integers as plain decimals. Header spelling
//! comes from [`FieldNames`](crate::config::FieldNames).
//!
//! ## Failure Policy
//! - Reads are fail-soft: any I/O or parse problem is reported alongside an
//!   empty collection (see [`LoadReport`])
//! - Writes are fail-hard: errors propagate to the caller
//!
//! There is no locking and no atomic replace. Two processes sharing a file can
//! corrupt it, and a crash in the middle of `save_all` can leave a truncated
//! file behind.

mod csv_store;

pub use csv_store::{CountryStore, LoadReport};
