//! # Policy Category — Single Source of Truth
//!
//! Defines the `PolicyCategory` enum with the six policy fields tracked for
//! every country. This is the ONE definition used across the workspace.
//! Every `match` on `PolicyCategory` must be exhaustive, so adding a field
//! forces scoring, comparison and rendering to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PmxError;

/// The six policy fields of the matrix.
///
/// # Categories
///
/// | # | Category | Column | Label |
/// |---|----------|--------|-------|
/// | 1 | Prevention | `prevention` | Prevention |
/// | 2 | Administrative | `administrative` | Administrative Measures |
/// | 3 | CriminalJustice | `criminal_justice` | Criminal Justice |
/// | 4 | Surveillance | `surveillance` | Surveillance/Monitoring |
/// | 5 | RehabReintegration | `rehab_reintegration` | Rehabilitation/Reintegration |
/// | 6 | WomenChildren | `women_children_notes` | Women & Children |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolicyCategory {
    /// Prevention programmes.
    #[serde(rename = "prevention")]
    Prevention,
    /// Administrative measures (travel bans, passport revocation).
    #[serde(rename = "administrative")]
    Administrative,
    /// Criminal justice instruments.
    #[serde(rename = "criminal_justice")]
    CriminalJustice,
    /// Surveillance and monitoring.
    #[serde(rename = "surveillance")]
    Surveillance,
    /// Rehabilitation and reintegration.
    #[serde(rename = "rehab_reintegration")]
    RehabReintegration,
    /// Women and children.
    #[serde(rename = "women_children_notes")]
    WomenChildren,
}

/// Total number of policy categories.
pub const POLICY_CATEGORY_COUNT: usize = 6;

impl PolicyCategory {
    /// Returns all six categories in canonical (column) order.
    pub fn all() -> &'static [PolicyCategory; POLICY_CATEGORY_COUNT] {
        &[
            Self::Prevention,
            Self::Administrative,
            Self::CriminalJustice,
            Self::Surveillance,
            Self::RehabReintegration,
            Self::WomenChildren,
        ]
    }

    /// Position of this category in canonical order.
    pub fn index(&self) -> usize {
        match self {
            Self::Prevention => 0,
            Self::Administrative => 1,
            Self::CriminalJustice => 2,
            Self::Surveillance => 3,
            Self::RehabReintegration => 4,
            Self::WomenChildren => 5,
        }
    }

    /// The dataset column name for this category.
    ///
    /// Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prevention => "prevention",
            Self::Administrative => "administrative",
            Self::CriminalJustice => "criminal_justice",
            Self::Surveillance => "surveillance",
            Self::RehabReintegration => "rehab_reintegration",
            Self::WomenChildren => "women_children_notes",
        }
    }

    /// Human-readable label used in tables and comparisons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prevention => "Prevention",
            Self::Administrative => "Administrative Measures",
            Self::CriminalJustice => "Criminal Justice",
            Self::Surveillance => "Surveillance/Monitoring",
            Self::RehabReintegration => "Rehabilitation/Reintegration",
            Self::WomenChildren => "Women & Children",
        }
    }
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyCategory {
    type Err = PmxError;

    /// Parse a category from its column name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prevention" => Ok(Self::Prevention),
            "administrative" => Ok(Self::Administrative),
            "criminal_justice" => Ok(Self::CriminalJustice),
            "surveillance" => Ok(Self::Surveillance),
            "rehab_reintegration" => Ok(Self::RehabReintegration),
            "women_children_notes" => Ok(Self::WomenChildren),
            other => Err(PmxError::UnknownCategory(other.to_string())),
        }
    }
}
