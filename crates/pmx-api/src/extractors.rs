//! # Query Extraction & Validation
//!
//! Query strings are extracted as `Result<Query<T>, QueryRejection>` so
//! deserialization failures become [`AppError::BadRequest`] with the
//! standard JSON body instead of axum's plain-text rejection.

use std::collections::BTreeSet;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;

use pmx_core::{CountryName, ReviewStatus};
use pmx_matrix::{CategoryFocus, Dataset, FilterCriteria};

use crate::error::AppError;

/// Query types that check rules serde cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a query, mapping rejections to [`AppError::BadRequest`].
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Unwrap a query and validate it.
pub fn extract_validated_query<T: Validate>(
    result: Result<Query<T>, QueryRejection>,
) -> Result<T, AppError> {
    let value = extract_query(result)?;
    value.validate().map_err(AppError::BadRequest)?;
    Ok(value)
}

/// Dashboard filter parameters.
///
/// `countries` and `statuses` are comma-separated. An absent parameter
/// selects everything; a present but empty one selects nothing.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub countries: Option<String>,
    #[serde(default)]
    pub statuses: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

impl Validate for FilterQuery {
    fn validate(&self) -> Result<(), String> {
        self.parse_focus().map(|_| ()).map_err(|e| e.to_string())
    }
}

impl FilterQuery {
    fn parse_focus(&self) -> Result<CategoryFocus, pmx_core::PmxError> {
        self.focus
            .as_deref()
            .map_or(Ok(CategoryFocus::All), str::parse)
    }

    /// Resolve against the dataset's default selection.
    pub fn into_criteria(self, dataset: &Dataset) -> Result<FilterCriteria, AppError> {
        let mut criteria = FilterCriteria::all(dataset);
        criteria.focus = self.parse_focus()?;
        if let Some(raw) = self.countries.as_deref() {
            criteria.countries = split_list(raw)
                .filter_map(|name| CountryName::new(name).ok())
                .collect();
        }
        if let Some(raw) = self.statuses.as_deref() {
            criteria.statuses = split_list(raw).map(ReviewStatus::parse).collect::<BTreeSet<_>>();
        }
        Ok(criteria)
    }
}

/// Comparison parameters. Missing sides fall back to the default pair.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
}

impl Validate for CompareQuery {
    fn validate(&self) -> Result<(), String> {
        for (side, value) in [("a", &self.a), ("b", &self.b)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("parameter {side:?} must not be blank"));
            }
        }
        Ok(())
    }
}

/// Non-empty trimmed items of a comma-separated list.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
