//! # Matchboard
//!
//! Admin dashboard backend for event participant matching. Loads six record
//! tables concurrently, derives headline metrics with fixed fallbacks, and
//! tracks which of seven dashboard pages is selected.
//!
//! ## Features
//!
//! - **Concurrent loading**: all tables fetched at once, one failure never affects another
//! - **Always renders**: failed or empty tables become empty collections, metrics fall back
//! - **Explicit view state**: immutable snapshots advanced by discrete events
//! - **Real-time**: WebSocket snapshot stream for live dashboards
//!
//! ## Modules
//!
//! - [`records`]: Record types and table names
//! - [`backend`]: Record sources (table API, in-memory)
//! - [`loader`]: Concurrent six-table load cycle
//! - [`dashboard`]: View state, summary metrics and page view models
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matchboard::backend::MemorySource;
//! use matchboard::dashboard::DashboardController;
//! use matchboard::loader::DataLoader;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = DataLoader::new(Arc::new(MemorySource::new()));
//!     let controller = Arc::new(DashboardController::new(loader));
//!
//!     // Start the one and only load cycle
//!     Arc::clone(&controller).mount();
//!
//!     let state = controller.settled().await;
//!     println!("Participants: {}", state.summary().total_participants);
//!
//!     controller.select_page("Reports");
//!     println!("Now showing: {}", controller.render_current().title);
//! }
//! ```

pub mod api;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod loader;
pub mod logging;
pub mod records;
pub mod websocket;

// Re-export top-level types for convenience
pub use records::{
    Anticipation, Collections, Insight, Match, Meeting, Participant, RecordId, Table,
    TopMatching,
};

pub use backend::{BackendError, MemorySource, RecordSource, RestSource, RestSourceConfig};

pub use loader::{DataLoader, LoadReport, LoadResult, TableOutcome};

pub use dashboard::{
    DashboardController, DashboardEvent, DashboardSnapshot, DashboardState, Page, PageView,
    SummaryMetrics,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError};
