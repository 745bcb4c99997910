//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Current snapshot
//! - GET /api/v1/summary - Summary metrics only

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::{DashboardSnapshot, SummaryMetrics};

/// GET /api/v1/dashboard
///
/// Selected page, loading flag, collection sizes and summary metrics.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.controller.state().snapshot())
}

/// GET /api/v1/summary
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryMetrics> {
    Json(state.controller.state().summary())
}
