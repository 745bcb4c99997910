//! Backend Data Service
//!
//! Read-only access to the six record tables.
//!
//! ## Sources
//!
//! - **RestSource**: PostgREST/Supabase-style HTTP API (`GET /rest/v1/{table}?select=*`)
//! - **MemorySource**: canned rows or failures per table, for offline runs and tests
//!
//! Every source returns raw JSON rows; decoding into record types happens in
//! the loader so that a decode failure is isolated to its own table.

mod memory;
mod rest;

pub use memory::MemorySource;
pub use rest::{RestSource, RestSourceConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::records::Table;

/// A raw row as returned by a source
pub type Row = serde_json::Value;

/// Common trait for all record sources
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch every row of a table, unfiltered and unpaginated
    async fn fetch_rows(&self, table: Table) -> Result<Vec<Row>, BackendError>;
}

/// Errors that can occur when reading from the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode {table} rows: {error}")]
    Decode { table: Table, error: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl BackendError {
    /// Classify a transport error the way the REST source reports it
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Timeout
        } else if e.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(e)
        }
    }
}
