//! # Policy Values
//!
//! A policy field holds one of three known levels, or whatever else the
//! source table contained. Classification is a total function: there is no
//! parse error, only [`PolicyValue::Unrecognized`].
//!
//! ```text
//! Strength (weakest → strongest): No < Partial < Yes
//! Score:                          0.0   0.5     1.0
//! Unrecognized: score 0.0, no strength, never a gap
//! ```

use serde::{Deserialize, Serialize};

/// The value of one policy field for one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyValue {
    /// Fully addressed.
    Yes,
    /// Partially addressed.
    Partial,
    /// Explicitly absent. The only value counted as a gap.
    No,
    /// Anything else, kept verbatim for display.
    Unrecognized(String),
}

impl PolicyValue {
    /// Classify a raw cell. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Yes" => Self::Yes,
            "Partial" => Self::Partial,
            "No" => Self::No,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The literal string as it appeared in the source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Contribution to the completeness score.
    pub fn score(&self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No | Self::Unrecognized(_) => 0.0,
        }
    }

    /// Rank in the known order, `None` for unrecognized values.
    pub fn strength(&self) -> Option<u8> {
        match self {
            Self::No => Some(0),
            Self::Partial => Some(1),
            Self::Yes => Some(2),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether this is a tracked gap (literal `No`).
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::No)
    }

    /// Whether the field has at least partial coverage.
    pub fn is_covered(&self) -> bool {
        matches!(self, Self::Yes | Self::Partial)
    }

    /// Whether the value is one of the three known levels.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for PolicyValue {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for PolicyValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<PolicyValue> for String {
    fn from(value: PolicyValue) -> Self {
        match value {
            PolicyValue::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
