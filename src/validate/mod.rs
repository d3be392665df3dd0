//! Validator Module
//!
//! Pure checks over raw text tokens, applied before anything is parsed or
//! persisted.
//!
//! ## Rules
//! - Integers are plain ASCII digit strings: no sign, no decimal point, no
//!   whitespace inside the token, and they must fit in a `u64`
//! - Strings are empty if nothing is left after trimming
//! - Continents must belong to the fixed five-value set

mod input;

pub use input::{check_new_name, CountryInput};

use crate::error::ValidationError;
use crate::model::Continent;

/// Parse a digit-only token. `None` for anything else, including overflow.
fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// True iff every character is a decimal digit and the value is > 0
pub fn is_positive_integer(text: &str) -> bool {
    matches!(parse_digits(text), Some(n) if n > 0)
}

/// True iff every character is a decimal digit (0 allowed)
pub fn is_non_negative_integer(text: &str) -> bool {
    parse_digits(text).is_some()
}

/// True if something remains after trimming surrounding whitespace
pub fn is_non_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Case-insensitive membership in the continent set
pub fn is_known_continent(text: &str) -> bool {
    Continent::parse(text).is_some()
}

// =============================================================================
// Typed helpers
// =============================================================================

/// Parse a positive integer, mapping failure through `on_error`
pub fn parse_positive(
    text: &str,
    on_error: impl FnOnce(String) -> ValidationError,
) -> Result<u64, ValidationError> {
    match parse_digits(text) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(on_error(text.to_string())),
    }
}

/// Parse a non-negative range bound
pub fn parse_non_negative(text: &str) -> Result<u64, ValidationError> {
    parse_digits(text).ok_or_else(|| ValidationError::InvalidBound(text.to_string()))
}

/// Trimmed name, or `EmptyName`
pub fn require_name(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed)
}

/// Continent from user text: empty and unknown values are told apart
pub fn parse_continent(text: &str) -> Result<Continent, ValidationError> {
    if !is_non_empty(text) {
        return Err(ValidationError::EmptyContinent);
    }
    Continent::parse(text).ok_or_else(|| ValidationError::UnknownContinent(text.trim().to_string()))
}

/// Both bounds non-negative and `low <= high`
pub fn parse_range(low: &str, high: &str) -> Result<(u64, u64), ValidationError> {
    let low = parse_non_negative(low.trim())?;
    let high = parse_non_negative(high.trim())?;
    if low > high {
        return Err(ValidationError::InvertedRange { low, high });
    }
    Ok((low, high))
}

/// Number of countries to insert in one batch
pub fn parse_count(text: &str) -> Result<usize, ValidationError> {
    let trimmed = text.trim();
    match parse_digits(trimmed) {
        Some(n) if n > 0 => usize::try_from(n).map_err(|_| ValidationError::InvalidCount(trimmed.to_string())),
        _ => Err(ValidationError::InvalidCount(trimmed.to_string())),
    }
}
