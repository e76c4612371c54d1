//! # Comparator
//!
//! Side-by-side comparison of two countries. Each policy category gets a
//! [`Verdict`]; the pair as a whole gets a one-line narrative based on
//! completeness.
//!
//! ## Verdict rule
//!
//! Strength order is `Yes > Partial > No`. Unrecognized values sit outside
//! the order:
//!
//! 1. same literal text → `Equal` (two identical unrecognized values are
//!    equal too);
//! 2. both known and A stronger → `AStronger`;
//! 3. both known and B stronger → `BStronger`;
//! 4. otherwise → `Divergent`.

use std::cmp::Ordering;

use serde::Serialize;

use pmx_core::{CountryName, PmxError, PolicyCategory, PolicyValue};

use crate::dataset::Dataset;
use crate::record::PolicyRecord;

/// Outcome of comparing one category across two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Equal,
    AStronger,
    BStronger,
    /// Values differ and cannot be ordered.
    Divergent,
}

impl Verdict {
    /// Classify a pair of values.
    pub fn classify(a: &PolicyValue, b: &PolicyValue) -> Self {
        if a == b {
            return Self::Equal;
        }
        match (a.strength(), b.strength()) {
            (Some(sa), Some(sb)) => match sa.cmp(&sb) {
                Ordering::Greater => Self::AStronger,
                Ordering::Less => Self::BStronger,
                Ordering::Equal => Self::Equal,
            },
            _ => Self::Divergent,
        }
    }

    /// Table note, e.g. `"France stronger"`.
    pub fn describe(&self, a: &CountryName, b: &CountryName) -> String {
        match self {
            Self::Equal => "Equal".to_string(),
            Self::AStronger => format!("{a} stronger"),
            Self::BStronger => format!("{b} stronger"),
            Self::Divergent => "Divergent".to_string(),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: PolicyCategory,
    pub label: &'static str,
    pub value_a: PolicyValue,
    pub value_b: PolicyValue,
    pub verdict: Verdict,
    pub note: String,
}

/// Full comparison of two records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub country_a: CountryName,
    pub country_b: CountryName,
    pub score_a: f64,
    pub score_b: f64,
    /// More complete country; `None` on a tie.
    pub leader: Option<CountryName>,
    pub per_category: Vec<CategoryComparison>,
    pub overall_summary: String,
}

/// Compare two records category by category.
pub fn compare(a: &PolicyRecord, b: &PolicyRecord) -> Comparison {
    let (name_a, name_b) = (a.country(), b.country());

    let per_category = PolicyCategory::all()
        .iter()
        .map(|&category| {
            let (value_a, value_b) = (a.value(category), b.value(category));
            let verdict = Verdict::classify(value_a, value_b);
            CategoryComparison {
                category,
                label: category.label(),
                value_a: value_a.clone(),
                value_b: value_b.clone(),
                verdict,
                note: verdict.describe(name_a, name_b),
            }
        })
        .collect();

    let (score_a, score_b) = (a.completeness_pct(), b.completeness_pct());
    let (leader, overall_summary) = match score_a.total_cmp(&score_b) {
        Ordering::Greater => (
            Some(name_a.clone()),
            format!("{name_a} is more complete ({score_a:.1}% vs {score_b:.1}%)"),
        ),
        Ordering::Less => (
            Some(name_b.clone()),
            format!("{name_b} is more complete ({score_b:.1}% vs {score_a:.1}%)"),
        ),
        Ordering::Equal => (
            None,
            format!("{name_a} and {name_b} are equally complete ({score_a:.1}%)"),
        ),
    };

    Comparison {
        country_a: name_a.clone(),
        country_b: name_b.clone(),
        score_a,
        score_b,
        leader,
        per_category,
        overall_summary,
    }
}

/// Resolve two countries and compare them.
pub fn compare_countries(dataset: &Dataset, a: &str, b: &str) -> Result<Comparison, PmxError> {
    let record_a = dataset.get(a)?;
    let record_b = dataset.get(b)?;
    Ok(compare(record_a, record_b))
}
