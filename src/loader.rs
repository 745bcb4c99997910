//! Data Loader
//!
//! Fetches all six tables concurrently and settles once the last one
//! resolves. A table that fails (transport, status or decode error) or
//! returns nothing becomes an empty collection; the other five are never
//! affected. No retries, no pagination.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::backend::{RecordSource, Row};
use crate::records::{
    Anticipation, Collections, Insight, Match, Meeting, Participant, Record, Table, TopMatching,
};

/// How one table's fetch settled
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableOutcome {
    Loaded { rows: usize },
    Empty,
    Failed { reason: String },
}

/// Outcome of one table within a load cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLoad {
    pub table: Table,
    #[serde(flatten)]
    pub outcome: TableOutcome,
}

/// Per-table outcomes of a load cycle
///
/// Diagnostic only. The view never sees failures, just empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
    pub elapsed_ms: u64,
}

impl LoadReport {
    pub fn outcome(&self, table: Table) -> Option<&TableOutcome> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| &t.outcome)
    }

    pub fn failed_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| matches!(t.outcome, TableOutcome::Failed { .. }))
            .count()
    }
}

/// Result of a settled load cycle
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub collections: Collections,
    pub report: LoadReport,
}

/// Loads every table from a record source
#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn RecordSource>,
}

impl DataLoader {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Run one load cycle
    ///
    /// All six fetches are in flight at once; this returns only after the
    /// last of them settles.
    pub async fn load(&self) -> LoadResult {
        let started = Instant::now();
        let source = self.source.as_ref();

        tracing::info!(source = %source.name(), "Loading dashboard collections");

        let (
            (participants, participants_outcome),
            (matches, matches_outcome),
            (meetings, meetings_outcome),
            (insights, insights_outcome),
            (top_matching, top_matching_outcome),
            (anticipation, anticipation_outcome),
        ) = tokio::join!(
            fetch_collection::<Participant>(source),
            fetch_collection::<Match>(source),
            fetch_collection::<Meeting>(source),
            fetch_collection::<Insight>(source),
            fetch_collection::<TopMatching>(source),
            fetch_collection::<Anticipation>(source),
        );

        let outcomes = [
            participants_outcome,
            matches_outcome,
            meetings_outcome,
            insights_outcome,
            top_matching_outcome,
            anticipation_outcome,
        ];

        let report = LoadReport {
            tables: Table::ALL
                .into_iter()
                .zip(outcomes)
                .map(|(table, outcome)| TableLoad { table, outcome })
                .collect(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        let collections = Collections {
            participants,
            matches,
            meetings,
            insights,
            top_matching,
            anticipation,
        };

        tracing::info!(
            participants = collections.participants.len(),
            matches = collections.matches.len(),
            meetings = collections.meetings.len(),
            insights = collections.insights.len(),
            top_matching = collections.top_matching.len(),
            anticipation = collections.anticipation.len(),
            failed = report.failed_count(),
            elapsed_ms = report.elapsed_ms,
            "Dashboard collections settled"
        );

        LoadResult {
            collections,
            report,
        }
    }
}

/// Fetch and decode one table, isolating any failure to it
async fn fetch_collection<T: Record>(source: &dyn RecordSource) -> (Vec<T>, TableOutcome) {
    let table = T::TABLE;

    let result = source
        .fetch_rows(table)
        .await
        .map(|rows| decode_rows::<T>(table, rows));

    match result {
        Ok(records) if records.is_empty() => {
            tracing::debug!(table = %table, "Table returned no rows");
            (Vec::new(), TableOutcome::Empty)
        }
        Ok(records) => {
            tracing::debug!(table = %table, rows = records.len(), "Table loaded");
            let rows = records.len();
            (records, TableOutcome::Loaded { rows })
        }
        Err(e) => {
            tracing::warn!(table = %table, error = %e, "Table fetch failed, using empty collection");
            (
                Vec::new(),
                TableOutcome::Failed {
                    reason: e.to_string(),
                },
            )
        }
    }
}

/// Decode rows one by one
///
/// Field types are coerced by the record types, so only a row that is not
/// an object at all is dropped.
fn decode_rows<T: Record>(table: Table, rows: Vec<Row>) -> Vec<T> {
    let total = rows.len();
    let records: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(table = %table, index, error = %e, "Skipping undecodable row");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            table = %table,
            skipped = total - records.len(),
            rows = records.len(),
            "Some rows could not be decoded"
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, MemorySource};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn loader(source: MemorySource) -> DataLoader {
        DataLoader::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_all_tables_empty() {
        let result = loader(MemorySource::new()).load().await;

        assert!(result.collections.is_empty());
        for table in Table::ALL {
            assert_eq!(result.report.outcome(table), Some(&TableOutcome::Empty));
        }
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let source = MemorySource::new()
            .with_rows(
                Table::Participants,
                vec![
                    json!({"id": "p-1", "is_identified": true, "satisfaction": 80}),
                    json!({"id": "p-2", "is_identified": false, "satisfaction": 90}),
                ],
            )
            .with_failure(Table::Matches, "network down")
            .with_rows(Table::Meetings, vec![json!({"id": "mt-1", "anticipation": true})])
            .with_failure(Table::Insights, "unauthorized")
            .with_rows(
                Table::TopMatching,
                vec![json!({"id": 1, "participant_id": "p-1", "score": 98})],
            );

        let result = loader(source).load().await;
        let c = &result.collections;

        assert_eq!(c.participants.len(), 2);
        assert!(c.matches.is_empty());
        assert_eq!(c.meetings.len(), 1);
        assert!(c.insights.is_empty());
        assert_eq!(c.top_matching[0].id.as_str(), "1");
        assert!(c.anticipation.is_empty());

        assert_eq!(
            result.report.outcome(Table::Participants),
            Some(&TableOutcome::Loaded { rows: 2 })
        );
        assert!(matches!(
            result.report.outcome(Table::Matches),
            Some(TableOutcome::Failed { .. })
        ));
        assert_eq!(result.report.failed_count(), 2);
    }

    #[tokio::test]
    async fn test_odd_rows_do_not_empty_the_table() {
        let mut participants: Vec<Row> = (0..200)
            .map(|i| json!({"id": i, "is_identified": i % 2 == 0, "satisfaction": 80}))
            .collect();
        participants.push(json!({"id": "p-x", "satisfaction": "85"}));
        participants.push(json!("not a row"));

        let source = MemorySource::new()
            .with_rows(Table::Participants, participants)
            .with_rows(Table::Matches, vec![json!({"id": "m-1"})]);

        let result = loader(source).load().await;
        let c = &result.collections;

        assert_eq!(c.participants.len(), 201);
        assert_eq!(c.participants[200].satisfaction, 85.0);
        assert_eq!(c.matches.len(), 1);
        assert_eq!(
            result.report.outcome(Table::Participants),
            Some(&TableOutcome::Loaded { rows: 201 })
        );
        assert_eq!(result.report.failed_count(), 0);
    }

    #[tokio::test]
    async fn test_only_undecodable_rows_is_empty() {
        let source = MemorySource::new().with_rows(Table::Insights, vec![json!(1), json!(null)]);

        let result = loader(source).load().await;

        assert!(result.collections.insights.is_empty());
        assert_eq!(result.report.outcome(Table::Insights), Some(&TableOutcome::Empty));
    }

    /// Holds every fetch until all six have started
    struct GatedSource {
        barrier: Barrier,
    }

    #[async_trait]
    impl RecordSource for GatedSource {
        fn name(&self) -> &str {
            "gated"
        }

        async fn fetch_rows(&self, _table: Table) -> Result<Vec<Row>, BackendError> {
            self.barrier.wait().await;
            Ok(vec![json!({"id": "x"})])
        }
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let source = GatedSource {
            barrier: Barrier::new(Table::ALL.len()),
        };
        let loader = DataLoader::new(Arc::new(source));

        // Sequential fetching would never get past the barrier
        let result = tokio::time::timeout(Duration::from_secs(5), loader.load())
            .await
            .expect("fetches were not issued concurrently");

        for table in Table::ALL {
            assert_eq!(result.collections.len(table), 1);
        }
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = LoadReport {
            tables: vec![
                TableLoad {
                    table: Table::TopMatching,
                    outcome: TableOutcome::Loaded { rows: 3 },
                },
                TableLoad {
                    table: Table::Insights,
                    outcome: TableOutcome::Failed {
                        reason: "boom".to_string(),
                    },
                },
            ],
            elapsed_ms: 12,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tables"][0]["table"], "top_matching");
        assert_eq!(value["tables"][0]["status"], "loaded");
        assert_eq!(value["tables"][0]["rows"], 3);
        assert_eq!(value["tables"][1]["status"], "failed");
        assert_eq!(value["tables"][1]["reason"], "boom");
    }
}
