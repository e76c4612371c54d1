//! # Compare
//!
//! `GET /v1/compare?a=&b=`. A missing side falls back to the dataset's
//! default pair.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use pmx_matrix::{compare_countries, Comparison};

use crate::error::AppError;
use crate::extractors::{extract_validated_query, CompareQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/compare", get(compare))
}

async fn compare(
    State(state): State<AppState>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<Comparison>, AppError> {
    let req = extract_validated_query(query)?;
    let dataset = &state.dataset;

    let (a, b) = match (req.a, req.b) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let (first, second) = dataset.default_pair().ok_or_else(|| {
                AppError::BadRequest("not enough countries to compare".to_string())
            })?;
            (
                a.unwrap_or_else(|| first.to_string()),
                b.unwrap_or_else(|| second.to_string()),
            )
        }
    };

    let comparison = compare_countries(dataset, a.trim(), b.trim())?;
    tracing::debug!(a = %comparison.country_a, b = %comparison.country_b, "compared countries");
    Ok(Json(comparison))
}
