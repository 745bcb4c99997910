//! Collection Routes
//!
//! - GET /api/v1/collections/:table - Loaded rows of one table

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::CollectionResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::records::Table;

/// GET /api/v1/collections/:table
///
/// Rows as loaded. Before the load cycle settles, and for tables that
/// failed, this is an empty list.
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<CollectionResponse>> {
    let table: Table = name.parse()?;
    let dashboard = state.controller.state();
    let collections = dashboard.collections();

    let rows = collections
        .rows_json(table)
        .map_err(|e| ApiError::Internal(format!("Failed to encode {}: {}", table, e)))?;

    Ok(Json(CollectionResponse {
        table,
        count: collections.len(table),
        rows,
    }))
}
