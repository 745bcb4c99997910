//! Summary Metrics
//!
//! Headline numbers for the real-time dashboard. Each metric falls back to
//! a fixed value when its count is zero, so the cards are never blank even
//! when the backend has nothing to say.

use serde::Serialize;

use crate::records::Collections;

pub const FALLBACK_TOTAL_PARTICIPANTS: usize = 150;
pub const FALLBACK_TOTAL_IDENTIFIED: usize = 29;
pub const FALLBACK_TOTAL_MATCHES: usize = 160;
pub const FALLBACK_AVG_SATISFACTION: i64 = 78;
pub const FALLBACK_TOTAL_MEETINGS: usize = 18;

/// Peak activity, not derived from data
pub const PEAK: f64 = 4.3;

/// Derived headline metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_participants: usize,
    pub total_identified: usize,
    pub total_matches: usize,
    /// Rounded mean satisfaction, percent
    pub avg_satisfaction: i64,
    pub total_meetings: usize,
    pub peak: f64,
}

impl SummaryMetrics {
    pub fn derive(collections: &Collections) -> Self {
        let participants = &collections.participants;

        let identified = participants.iter().filter(|p| p.is_identified).count();

        // Only an empty collection falls back; all-zero scores average to 0
        let avg_satisfaction = if participants.is_empty() {
            FALLBACK_AVG_SATISFACTION
        } else {
            let sum: f64 = participants.iter().map(|p| p.satisfaction).sum();
            round_half_up(sum / participants.len() as f64)
        };

        Self {
            total_participants: or_fallback(participants.len(), FALLBACK_TOTAL_PARTICIPANTS),
            total_identified: or_fallback(identified, FALLBACK_TOTAL_IDENTIFIED),
            total_matches: or_fallback(collections.matches.len(), FALLBACK_TOTAL_MATCHES),
            avg_satisfaction,
            total_meetings: or_fallback(collections.meetings.len(), FALLBACK_TOTAL_MEETINGS),
            peak: PEAK,
        }
    }
}

impl Default for SummaryMetrics {
    /// Metrics of a dashboard with no data at all
    fn default() -> Self {
        Self::derive(&Collections::default())
    }
}

fn or_fallback(count: usize, fallback: usize) -> usize {
    if count == 0 {
        fallback
    } else {
        count
    }
}

/// Round half toward positive infinity
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Match, Meeting, Participant, RecordId};

    fn participant(identified: bool, satisfaction: f64) -> Participant {
        Participant {
            id: RecordId::default(),
            name: String::new(),
            login_time: String::new(),
            is_identified: identified,
            satisfaction,
        }
    }

    fn with_participants(participants: Vec<Participant>) -> Collections {
        Collections {
            participants,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collections_use_fallbacks() {
        let m = SummaryMetrics::derive(&Collections::default());
        assert_eq!(m.total_participants, 150);
        assert_eq!(m.total_identified, 29);
        assert_eq!(m.total_matches, 160);
        assert_eq!(m.avg_satisfaction, 78);
        assert_eq!(m.total_meetings, 18);
        assert_eq!(m.peak, 4.3);
        assert_eq!(m, SummaryMetrics::default());
    }

    #[test]
    fn test_average_satisfaction() {
        let c = with_participants(vec![participant(false, 80.0), participant(false, 90.0)]);
        assert_eq!(SummaryMetrics::derive(&c).avg_satisfaction, 85);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let c = with_participants(vec![participant(false, 80.0), participant(false, 81.0)]);
        assert_eq!(SummaryMetrics::derive(&c).avg_satisfaction, 81);

        let c = with_participants(vec![
            participant(false, 70.0),
            participant(false, 70.0),
            participant(false, 71.0),
        ]);
        assert_eq!(SummaryMetrics::derive(&c).avg_satisfaction, 70);
    }

    #[test]
    fn test_all_zero_satisfaction_is_not_fallback() {
        let c = with_participants(vec![participant(true, 0.0), participant(true, 0.0)]);
        assert_eq!(SummaryMetrics::derive(&c).avg_satisfaction, 0);
    }

    #[test]
    fn test_identified_count() {
        let c = with_participants(vec![
            participant(true, 50.0),
            participant(false, 50.0),
            participant(true, 50.0),
        ]);
        let m = SummaryMetrics::derive(&c);
        assert_eq!(m.total_participants, 3);
        assert_eq!(m.total_identified, 2);
    }

    #[test]
    fn test_zero_identified_falls_back() {
        let c = with_participants(vec![participant(false, 60.0)]);
        let m = SummaryMetrics::derive(&c);
        assert_eq!(m.total_participants, 1);
        assert_eq!(m.total_identified, 29);
        assert_eq!(m.avg_satisfaction, 60);
    }

    #[test]
    fn test_counts_are_independent() {
        let c = Collections {
            matches: vec![
                Match {
                    id: RecordId::from("m-1"),
                    participant1_id: RecordId::from("p-1"),
                    participant2_id: RecordId::from("p-2"),
                    match_time: "13:00".to_string(),
                };
                3
            ],
            meetings: vec![Meeting {
                id: RecordId::from("mt-1"),
                match_id: RecordId::from("m-1"),
                start_time: "14:00".to_string(),
                anticipation: true,
            }],
            ..Default::default()
        };

        let m = SummaryMetrics::derive(&c);
        assert_eq!(m.total_matches, 3);
        assert_eq!(m.total_meetings, 1);
        assert_eq!(m.total_participants, 150);
        assert_eq!(m.avg_satisfaction, 78);
    }
}
