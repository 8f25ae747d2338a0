//! Observability HTTP Routes
//!
//! Health check and request counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::employee::EmployeeStore;
use crate::observability::MetricsSnapshot;

use super::employee_routes::EmployeeState;
use super::errors::ApiError;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Metrics response: counters plus the current record count
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub employees: usize,
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Create observability routes
pub fn observability_routes<S: EmployeeStore + 'static>(state: Arc<EmployeeState<S>>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler::<S>))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler<S: EmployeeStore + 'static>(
    State(state): State<Arc<EmployeeState<S>>>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let employees = state.store.len()?;

    Ok(Json(MetricsResponse {
        employees,
        counters: state.metrics.snapshot(),
    }))
}
