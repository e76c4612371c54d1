//! # Error Types
//!
//! Errors surfaced by the policy matrix core. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Most input problems are recovered where they occur (malformed dates,
//! unrecognized values, rows without a country) and never become errors.
//! What remains here are the conditions a caller has to act on.

use thiserror::Error;

/// Top-level error type for the policy matrix core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PmxError {
    /// A country lookup did not resolve to a record.
    #[error("country not found: {0}")]
    NotFound(String),

    /// A country name was empty after trimming.
    #[error("invalid country name: {0:?}")]
    InvalidCountry(String),

    /// A string did not name one of the six policy categories.
    #[error("unknown policy category: {0:?}")]
    UnknownCategory(String),

    /// A category focus was neither `all`/`none` nor a category name.
    #[error("unknown category focus: {0:?}")]
    UnknownFocus(String),
}
