//! REST Record Source
//!
//! HTTP client for a PostgREST-compatible table API (as exposed by Supabase).
//! Each table is read with a single unfiltered `select=*` query.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{BackendError, RecordSource, Row};
use crate::records::Table;

/// Configuration for the REST source
#[derive(Debug, Clone)]
pub struct RestSourceConfig {
    /// Project base URL (e.g., "https://xyz.supabase.co")
    pub base_url: String,
    /// Path prefix of the table API
    pub rest_path: String,
    /// Anonymous/service key sent as `apikey` and bearer token
    pub api_key: Option<String>,
    /// Per-query timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for RestSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            rest_path: "/rest/v1".to_string(),
            api_key: None,
            request_timeout_ms: 10_000,
        }
    }
}

/// PostgREST table client
pub struct RestSource {
    client: Client,
    config: RestSourceConfig,
}

impl RestSource {
    /// Create a new REST source with the given configuration
    pub fn new(config: RestSourceConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| BackendError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RestSourceConfig {
        &self.config
    }

    /// Full URL of a table endpoint, without query string
    fn table_url(&self, table: Table) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let table = urlencoding::encode(table.name());
        match self.config.rest_path.trim_matches('/') {
            "" => format!("{}/{}", base, table),
            path => format!("{}/{}/{}", base, path, table),
        }
    }
}

#[async_trait]
impl RecordSource for RestSource {
    fn name(&self) -> &str {
        "rest"
    }

    async fn fetch_rows(&self, table: Table) -> Result<Vec<Row>, BackendError> {
        let url = self.table_url(table);

        let mut request = self.client.get(&url).query(&[("select", "*")]);
        if let Some(key) = &self.config.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await.map_err(BackendError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.text().await.map_err(BackendError::from_transport)?;

        // PostgREST answers an empty table with `[]`; some proxies send nothing
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str::<Vec<Row>>(&body).map_err(|e| BackendError::Decode {
            table,
            error: e.to_string(),
        })
    }
}
