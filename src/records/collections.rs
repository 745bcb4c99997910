//! Collections
//!
//! One load cycle's worth of rows for all six tables. Replaced wholesale,
//! never mutated piecemeal.

use serde::Serialize;

use super::table::Table;
use super::types::{Anticipation, Insight, Match, Meeting, Participant, TopMatching};

/// Rows for all six tables
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collections {
    pub participants: Vec<Participant>,
    pub matches: Vec<Match>,
    pub meetings: Vec<Meeting>,
    pub insights: Vec<Insight>,
    pub top_matching: Vec<TopMatching>,
    pub anticipation: Vec<Anticipation>,
}

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSizes {
    pub participants: usize,
    pub matches: usize,
    pub meetings: usize,
    pub insights: usize,
    pub top_matching: usize,
    pub anticipation: usize,
}

impl Collections {
    /// Number of rows loaded for a table
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Participants => self.participants.len(),
            Table::Matches => self.matches.len(),
            Table::Meetings => self.meetings.len(),
            Table::Insights => self.insights.len(),
            Table::TopMatching => self.top_matching.len(),
            Table::Anticipation => self.anticipation.len(),
        }
    }

    /// True when no table has any rows
    pub fn is_empty(&self) -> bool {
        Table::ALL.iter().all(|t| self.len(*t) == 0)
    }

    pub fn sizes(&self) -> CollectionSizes {
        CollectionSizes {
            participants: self.participants.len(),
            matches: self.matches.len(),
            meetings: self.meetings.len(),
            insights: self.insights.len(),
            top_matching: self.top_matching.len(),
            anticipation: self.anticipation.len(),
        }
    }

    /// Rows of one table as JSON
    pub fn rows_json(&self, table: Table) -> serde_json::Result<serde_json::Value> {
        match table {
            Table::Participants => serde_json::to_value(&self.participants),
            Table::Matches => serde_json::to_value(&self.matches),
            Table::Meetings => serde_json::to_value(&self.meetings),
            Table::Insights => serde_json::to_value(&self.insights),
            Table::TopMatching => serde_json::to_value(&self.top_matching),
            Table::Anticipation => serde_json::to_value(&self.anticipation),
        }
    }
}
