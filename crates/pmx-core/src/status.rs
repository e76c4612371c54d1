//! # Review Status
//!
//! Traffic-light monitoring classification, independent of the
//! completeness score.

use serde::{Deserialize, Serialize};

/// Review status of a country's overall monitoring state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewStatus {
    /// Up to date.
    Green,
    /// Needs attention.
    Yellow,
    /// Significant gaps in monitoring.
    Red,
    /// Unrecognized status, preserved verbatim.
    Other(String),
}

impl ReviewStatus {
    /// The three known statuses in display order.
    pub const KNOWN: [ReviewStatus; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Classify a raw status cell. Case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Green" => Self::Green,
            "Yellow" => Self::Yellow,
            "Red" => Self::Red,
            other => Self::Other(other.to_string()),
        }
    }

    /// The status text as it appeared in the source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the three known statuses.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Display glyph. Unrecognized statuses get the neutral badge.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Green => "🟢",
            Self::Yellow => "🟡",
            Self::Red => "🔴",
            Self::Other(_) => "⚪",
        }
    }

    /// Glyph followed by the status text, e.g. `🟢 Green`.
    pub fn badge(&self) -> String {
        format!("{} {}", self.glyph(), self.as_str())
    }
}

impl From<String> for ReviewStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for ReviewStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<ReviewStatus> for String {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        for status in ReviewStatus::KNOWN {
            assert_eq!(ReviewStatus::parse(status.as_str()), status);
            assert!(status.is_known());
        }
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status = ReviewStatus::parse("Amber");
        assert_eq!(status, ReviewStatus::Other("Amber".into()));
        assert_eq!(status.as_str(), "Amber");
        assert!(!status.is_known());
    }

    #[test]
    fn badges() {
        assert_eq!(ReviewStatus::Green.badge(), "🟢 Green");
        assert_eq!(ReviewStatus::Red.badge(), "🔴 Red");
        assert_eq!(ReviewStatus::parse("green").badge(), "⚪ green");
    }

    #[test]
    fn serde_is_plain_string() {
        assert_eq!(serde_json::to_string(&ReviewStatus::Yellow).unwrap(), "\"Yellow\"");
        let other: ReviewStatus = serde_json::from_str("\"Blue\"").unwrap();
        assert_eq!(other, ReviewStatus::Other("Blue".into()));
    }
}
