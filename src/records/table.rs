//! Backend tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six tables the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Participants,
    Matches,
    Meetings,
    Insights,
    TopMatching,
    Anticipation,
}

impl Table {
    /// Every table, in load order
    pub const ALL: [Table; 6] = [
        Table::Participants,
        Table::Matches,
        Table::Meetings,
        Table::Insights,
        Table::TopMatching,
        Table::Anticipation,
    ];

    /// Table name on the backend
    pub fn name(&self) -> &'static str {
        match self {
            Table::Participants => "participants",
            Table::Matches => "matches",
            Table::Meetings => "meetings",
            Table::Insights => "insights",
            Table::TopMatching => "top_matching",
            Table::Anticipation => "anticipation",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown table: {0}")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Table::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| UnknownTable(s.to_string()))
    }
}
