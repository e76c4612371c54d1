//! # Policy Record
//!
//! One row of the matrix: a country, its review metadata, the six policy
//! values, and the derived completeness score.
//!
//! ## Invariant
//!
//! `completeness_pct` is computed in [`PolicyRecord::new`] from the six
//! values and there is no way to change either afterwards, so the score can
//! never drift from the data it summarizes.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use pmx_core::{CountryName, PolicyCategory, PolicyValue, ReviewDate, ReviewStatus, POLICY_CATEGORY_COUNT};

use crate::scoring;

/// An immutable, fully scored policy record.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    country: CountryName,
    last_update: Option<ReviewDate>,
    review_status: ReviewStatus,
    values: [PolicyValue; POLICY_CATEGORY_COUNT],
    notes: String,
    completeness_pct: f64,
}

impl PolicyRecord {
    /// Build a record. `values` are in [`PolicyCategory::all()`] order.
    pub fn new(
        country: CountryName,
        last_update: Option<ReviewDate>,
        review_status: ReviewStatus,
        values: [PolicyValue; POLICY_CATEGORY_COUNT],
        notes: impl Into<String>,
    ) -> Self {
        let completeness_pct = scoring::completeness(&values);
        Self {
            country,
            last_update,
            review_status,
            values,
            notes: notes.into(),
            completeness_pct,
        }
    }

    /// The record key.
    pub fn country(&self) -> &CountryName {
        &self.country
    }

    /// Date of the last update, `None` when unknown.
    pub fn last_update(&self) -> Option<&ReviewDate> {
        self.last_update.as_ref()
    }

    /// `YYYY-MM-DD`, or `"unknown"`.
    pub fn last_update_display(&self) -> String {
        self.last_update
            .map(|d| d.to_iso8601())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Review status as loaded.
    pub fn review_status(&self) -> &ReviewStatus {
        &self.review_status
    }

    /// Value of one policy field.
    pub fn value(&self, category: PolicyCategory) -> &PolicyValue {
        &self.values[category.index()]
    }

    /// All six values in canonical order.
    pub fn values(&self) -> &[PolicyValue; POLICY_CATEGORY_COUNT] {
        &self.values
    }

    /// `(category, value)` pairs in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = (PolicyCategory, &PolicyValue)> {
        PolicyCategory::all().iter().copied().zip(self.values.iter())
    }

    /// Free-text notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Completeness percentage, 0–100 with one decimal.
    pub fn completeness_pct(&self) -> f64 {
        self.completeness_pct
    }

    /// Number of fields marked exactly `No`.
    pub fn gap_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_gap()).count()
    }
}

impl Serialize for PolicyRecord {
    /// Flat layout matching the source table columns, plus the score.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PolicyRecord", 5 + POLICY_CATEGORY_COUNT)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field("last_update", &self.last_update)?;
        state.serialize_field("review_status", &self.review_status)?;
        for (category, value) in self.cells() {
            state.serialize_field(category.as_str(), value)?;
        }
        state.serialize_field("notes", &self.notes)?;
        state.serialize_field("completeness_pct", &self.completeness_pct)?;
        state.end()
    }
}
