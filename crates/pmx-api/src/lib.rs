//! # pmx-api — HTTP Service for the Policy Matrix
//!
//! Serves the dashboard's computed views over a dataset loaded once at
//! startup. Every endpoint is a read-only, pure computation over the shared
//! `Arc<Dataset>`.
//!
//! ## API Surface
//!
//! | Path                       | Module                   | Returns            |
//! |----------------------------|--------------------------|--------------------|
//! | `/v1/countries`            | [`routes::countries`]    | sorted names       |
//! | `/v1/countries/{country}`  | [`routes::countries`]    | one record         |
//! | `/v1/dashboard`            | [`routes::dashboard`]    | full dashboard     |
//! | `/v1/summary`              | [`routes::dashboard`]    | KPIs only          |
//! | `/v1/compare`              | [`routes::compare`]      | comparison         |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the application router with fresh metrics.
pub fn app(state: AppState) -> Router {
    app_with_metrics(state, ApiMetrics::new())
}

/// Assemble the application router, recording into `metrics`.
///
/// Health probes are mounted outside the metrics and trace layers.
pub fn app_with_metrics(state: AppState, metrics: ApiMetrics) -> Router {
    let api = Router::new()
        .merge(routes::countries::router())
        .merge(routes::dashboard::router())
        .merge(routes::compare::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: 200 while the process runs.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the dataset is loaded before the listener binds, so a
/// serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
