//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardSnapshot;
use crate::loader::LoadReport;
use crate::records::Table;

// ============================================
// PAGE DTOs
// ============================================

/// One entry of the navigation menu
#[derive(Debug, Serialize)]
pub struct PageEntry {
    pub slug: String,
    pub label: String,
    /// Whether this is the selected page
    pub active: bool,
}

/// Page list response
#[derive(Debug, Serialize)]
pub struct PageListResponse {
    pub pages: Vec<PageEntry>,
}

/// Page selection request
#[derive(Debug, Deserialize)]
pub struct SelectPageRequest {
    /// Page label or slug
    pub page: String,
}

/// Page selection response
#[derive(Debug, Serialize)]
pub struct SelectPageResponse {
    /// False when the page was unknown or already selected
    pub changed: bool,
    pub snapshot: DashboardSnapshot,
}

// ============================================
// COLLECTION DTOs
// ============================================

/// Rows of one loaded table
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub table: Table,
    pub count: usize,
    pub rows: serde_json::Value,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded, loading
    pub status: String,
    /// Record source in use
    pub source: String,
    /// Whether the load cycle is still running
    pub loading: bool,
    /// Per-table outcome of the load cycle, once settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadReport>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
