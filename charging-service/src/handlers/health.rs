use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "charging-service",
        "version": env!("CARGO_PKG_VERSION"),
        "customers": state.store.len(),
        "catalog_services": state.catalog.len(),
    }))
}

/// Readiness check endpoint.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Metrics endpoint for Prometheus scraping.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
