//! # Dashboard
//!
//! Both endpoints accept the same filter parameters (see
//! [`FilterQuery`]).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use pmx_matrix::{filter, summarize, DashboardView, Summary};

use crate::error::AppError;
use crate::extractors::{extract_validated_query, FilterQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/dashboard", get(dashboard))
        .route("/v1/summary", get(summary))
}

/// GET /v1/dashboard: KPIs, charts and table rows for the filtered view.
async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<DashboardView>, AppError> {
    let criteria = extract_validated_query(query)?.into_criteria(&state.dataset)?;
    Ok(Json(DashboardView::build(&state.dataset, criteria)))
}

/// GET /v1/summary: KPIs only.
async fn summary(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<Summary>, AppError> {
    let criteria = extract_validated_query(query)?.into_criteria(&state.dataset)?;
    Ok(Json(summarize(filter(&state.dataset, &criteria))))
}
