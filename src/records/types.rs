//! Record Types
//!
//! Flat row structures as returned by the backend data service.
//! Decoding is lenient: a missing, `null` or mistyped scalar falls back to
//! its default so one odd row never sinks a whole collection.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::table::Table;

/// Opaque record identifier
///
/// The backend sends text ids for most tables and integer ids for the
/// ranking tables. Both decode to the same string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => RecordId(s),
            Value::Number(n) => RecordId(n.to_string()),
            _ => RecordId::default(),
        })
    }
}

/// Scalars that decode from any JSON value
///
/// A missing, `null` or mistyped field becomes the default; numbers and
/// booleans sent as text are parsed.
trait Lenient: Sized + Default {
    fn from_json(value: Value) -> Self;
}

impl Lenient for String {
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }
}

impl Lenient for f64 {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or_default(),
            Value::String(s) => s.trim().parse().unwrap_or_default(),
            _ => 0.0,
        }
    }
}

impl Lenient for bool {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "t" | "1"),
            _ => false,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    Ok(T::from_json(Value::deserialize(deserializer)?))
}

/// A row type that lives in one backend table
pub trait Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Table this record is read from
    const TABLE: Table;

    /// Display key of the row
    fn id(&self) -> &RecordId;
}

/// An event participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub login_time: String,
    #[serde(default, deserialize_with = "lenient")]
    pub is_identified: bool,
    /// Satisfaction score, 0-100
    #[serde(default, deserialize_with = "lenient")]
    pub satisfaction: f64,
}

/// A pairing of two participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub participant1_id: RecordId,
    #[serde(default)]
    pub participant2_id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub match_time: String,
}

/// A meeting scheduled for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub match_id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub start_time: String,
    /// Flags meetings with upcoming interest
    #[serde(default, deserialize_with = "lenient")]
    pub anticipation: bool,
}

/// A notice shown as a card on the real-time dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub id: RecordId,
    /// Category tag, hyphenated (e.g. `high-engagement`)
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub action_link: String,
}

impl Insight {
    /// Card title: hyphens become spaces, every word starts upper-case
    pub fn title(&self) -> String {
        let mut title = String::with_capacity(self.kind.len());
        let mut at_word_start = true;

        for c in self.kind.chars() {
            let c = if c == '-' { ' ' } else { c };
            if at_word_start && c.is_ascii_alphanumeric() {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            at_word_start = !(c.is_ascii_alphanumeric() || c == '_');
        }

        title
    }
}

/// A participant's place in the match ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMatching {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub participant_id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub score: f64,
}

/// A participant's place in the meeting-anticipation ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anticipation {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub participant_id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub anticipation_score: f64,
}

macro_rules! impl_record {
    ($($ty:ty => $table:expr),* $(,)?) => {
        $(
            impl Record for $ty {
                const TABLE: Table = $table;

                fn id(&self) -> &RecordId {
                    &self.id
                }
            }
        )*
    };
}

impl_record! {
    Participant => Table::Participants,
    Match => Table::Matches,
    Meeting => Table::Meetings,
    Insight => Table::Insights,
    TopMatching => Table::TopMatching,
    Anticipation => Table::Anticipation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_deserialize() {
        let json = r#"{
            "id": "p-1",
            "name": "Kim Minseo",
            "login_time": "2024-07-01T13:00:00Z",
            "is_identified": true,
            "satisfaction": 98
        }"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "p-1");
        assert_eq!(p.name, "Kim Minseo");
        assert!(p.is_identified);
        assert_eq!(p.satisfaction, 98.0);
    }

    #[test]
    fn test_numeric_ids_become_text() {
        let json = r#"{"id": 7, "participant_id": "p-3", "score": 95.5}"#;
        let t: TopMatching = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, RecordId::from(7));
        assert_eq!(t.id.as_str(), "7");
        assert_eq!(t.score, 95.5);
    }

    #[test]
    fn test_missing_and_null_fields_use_defaults() {
        let json = r#"{"id": "p-2", "name": null, "satisfaction": null}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "");
        assert!(!p.is_identified);
        assert_eq!(p.satisfaction, 0.0);

        let m: Meeting = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(m.id.as_str(), "");
        assert!(!m.anticipation);
    }

    #[test]
    fn test_insight_type_field_rename() {
        let json = r#"{"id": "i-1", "type": "low-satisfaction", "description": "d", "action_link": "Review"}"#;
        let insight: Insight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.kind, "low-satisfaction");

        let out = serde_json::to_value(&insight).unwrap();
        assert_eq!(out["type"], "low-satisfaction");
    }

    #[test]
    fn test_insight_title() {
        let mut insight = Insight {
            id: RecordId::from("i-1"),
            kind: "high-engagement".to_string(),
            description: String::new(),
            action_link: String::new(),
        };
        assert_eq!(insight.title(), "High Engagement");

        insight.kind = "ai-suggestions-active".to_string();
        assert_eq!(insight.title(), "Ai Suggestions Active");

        insight.kind = "peak".to_string();
        assert_eq!(insight.title(), "Peak");

        insight.kind = String::new();
        assert_eq!(insight.title(), "");

        // Word starts are ASCII letters and digits only
        insight.kind = "élan-vital".to_string();
        assert_eq!(insight.title(), "éLan Vital");
    }

    #[test]
    fn test_mistyped_scalars_are_coerced() {
        let json = r#"{"id": "p-9", "name": 42, "is_identified": "true", "satisfaction": "85"}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "42");
        assert!(p.is_identified);
        assert_eq!(p.satisfaction, 85.0);

        let json = r#"{"id": {"nested": 1}, "is_identified": [1], "satisfaction": "very"}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "");
        assert!(!p.is_identified);
        assert_eq!(p.satisfaction, 0.0);

        let t: TopMatching = serde_json::from_str(r#"{"id": 3, "score": " 91.5 "}"#).unwrap();
        assert_eq!(t.score, 91.5);
    }

    #[test]
    fn test_record_tables() {
        assert_eq!(Participant::TABLE, Table::Participants);
        assert_eq!(TopMatching::TABLE, Table::TopMatching);
        assert_eq!(Anticipation::TABLE.name(), "anticipation");
    }
}
