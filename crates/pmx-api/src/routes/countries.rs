//! # Countries
//!
//! Country names and single policy records.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use pmx_core::CountryName;
use pmx_matrix::PolicyRecord;

use crate::error::AppError;
use crate::state::AppState;

/// Sorted country names.
#[derive(Debug, Serialize)]
pub struct CountryList {
    pub count: usize,
    pub countries: Vec<CountryName>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/countries", get(list_countries))
        .route("/v1/countries/{country}", get(get_country))
}

/// GET /v1/countries
async fn list_countries(State(state): State<AppState>) -> Json<CountryList> {
    let countries: Vec<CountryName> = state
        .dataset
        .countries_sorted()
        .into_iter()
        .cloned()
        .collect();
    Json(CountryList {
        count: countries.len(),
        countries,
    })
}

/// GET /v1/countries/{country}
async fn get_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<PolicyRecord>, AppError> {
    let record = state.dataset.get(&country)?;
    Ok(Json(record.clone()))
}
