//! Query Engine Module
//!
//! Read-only operations over a loaded collection.
//!
//! ## Responsibilities
//! - Exact and substring search by name (case-insensitive)
//! - Continent and inclusive numeric range filters
//! - Ordering by name, population or area in either direction
//!
//! Every operation is a full linear scan that preserves collection order,
//! except `sort_by`, which returns a reordered copy. Inputs are never mutated.

mod search;
mod filter;
mod sort;

pub use search::{find_exact, find_exact_mut, find_matching};
pub use filter::{filter_by_continent, filter_by_range};
pub use sort::{bubble_sort_by_key, sort_by};
