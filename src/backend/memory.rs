//! In-memory record source

use async_trait::async_trait;
use std::collections::HashMap;

use super::{BackendError, RecordSource, Row};
use crate::records::Table;

/// What a table answers with
#[derive(Debug, Clone)]
enum Canned {
    Rows(Vec<Row>),
    Fail(String),
}

/// Serves fixed rows per table
///
/// Tables that were never configured answer with zero rows.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<Table, Canned>,
}

impl MemorySource {
    /// A source where every table is empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `table` with the given rows
    pub fn with_rows(mut self, table: Table, rows: Vec<Row>) -> Self {
        self.tables.insert(table, Canned::Rows(rows));
        self
    }

    /// Answer `table` with an error
    pub fn with_failure(mut self, table: Table, message: impl Into<String>) -> Self {
        self.tables.insert(table, Canned::Fail(message.into()));
        self
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_rows(&self, table: Table) -> Result<Vec<Row>, BackendError> {
        match self.tables.get(&table) {
            Some(Canned::Rows(rows)) => Ok(rows.clone()),
            Some(Canned::Fail(message)) => Err(BackendError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}
