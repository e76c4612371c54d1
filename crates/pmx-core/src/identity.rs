//! # Country Identity
//!
//! `CountryName` is the record key of the matrix. The newtype keeps
//! free-text columns (notes, raw values) from being passed where a key is
//! expected, and guarantees the key is trimmed and non-empty.

use serde::{Deserialize, Serialize};

use crate::error::PmxError;

/// Validated country name. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryName(String);

impl CountryName {
    /// Create a country name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PmxError::InvalidCountry`] if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PmxError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PmxError::InvalidCountry(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryName {
    type Error = PmxError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<CountryName> for String {
    fn from(name: CountryName) -> Self {
        name.0
    }
}

impl std::borrow::Borrow<str> for CountryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
