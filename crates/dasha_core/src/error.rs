//! Error types for dasha calculations.

use thiserror::Error;

/// Errors from a dasha timeline calculation.
///
/// Only the birth date can fail; every other input is coerced to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DashaError {
    /// No birth date was supplied, or it was blank.
    #[error("missing birth date")]
    MissingBirthDate,
    /// The birth date did not parse to a calendar date.
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),
    /// Calculation settings that cannot produce forward-running periods.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
