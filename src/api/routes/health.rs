//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (load cycle settled)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::dashboard::DashboardState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 503 until the six table fetches have settled.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.controller.state().is_loading() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with the per-table load report.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dashboard = state.controller.state();

    Json(HealthResponse {
        status: overall_status(&dashboard).to_string(),
        source: state.controller.source_name().to_string(),
        loading: dashboard.is_loading(),
        load: dashboard.report().cloned(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// A failed table never takes the dashboard down, it only degrades it
fn overall_status(dashboard: &DashboardState) -> &'static str {
    if dashboard.is_loading() {
        return "loading";
    }

    match dashboard.report() {
        Some(report) if report.failed_count() > 0 => "degraded",
        _ => "healthy",
    }
}
