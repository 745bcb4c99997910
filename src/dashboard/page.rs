//! Dashboard pages
//!
//! The seven fixed pages of the admin dashboard. Each page has a display
//! label (as shown in the navigation menu) and a URL-safe slug; either one
//! selects it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    EventManagement,
    #[default]
    RealTimeDashboard,
    MatchingTracker,
    MeetingMonitoring,
    ParticipantManagement,
    Reports,
    AiMatchingSettings,
}

impl Page {
    /// Every page, in menu order
    pub const ALL: [Page; 7] = [
        Page::EventManagement,
        Page::RealTimeDashboard,
        Page::MatchingTracker,
        Page::MeetingMonitoring,
        Page::ParticipantManagement,
        Page::Reports,
        Page::AiMatchingSettings,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Page::EventManagement => "Event Management",
            Page::RealTimeDashboard => "Real-Time Dashboard",
            Page::MatchingTracker => "Matching Tracker",
            Page::MeetingMonitoring => "Meeting Monitoring",
            Page::ParticipantManagement => "Participant Management",
            Page::Reports => "Reports",
            Page::AiMatchingSettings => "AI Matching Settings",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::EventManagement => "event-management",
            Page::RealTimeDashboard => "real-time-dashboard",
            Page::MatchingTracker => "matching-tracker",
            Page::MeetingMonitoring => "meeting-monitoring",
            Page::ParticipantManagement => "participant-management",
            Page::Reports => "reports",
            Page::AiMatchingSettings => "ai-matching-settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an identifier names none of the seven pages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0:?}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    /// Accepts the exact menu label or the slug (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.label() == trimmed || p.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        assert_eq!(Page::default(), Page::RealTimeDashboard);
        assert_eq!(Page::default().label(), "Real-Time Dashboard");
    }

    #[test]
    fn test_labels_and_slugs_parse() {
        for page in Page::ALL {
            assert_eq!(page.label().parse::<Page>().unwrap(), page);
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
        assert_eq!("REPORTS".parse::<Page>().unwrap(), Page::Reports);
    }

    #[test]
    fn test_unknown_page() {
        assert!("Settings".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());
        // Labels are matched exactly, only slugs ignore case
        assert!("real-time dashboard".parse::<Page>().is_err());
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Page::AiMatchingSettings).unwrap();
        assert_eq!(json, "\"ai-matching-settings\"");
        for page in Page::ALL {
            let json = serde_json::to_value(page).unwrap();
            assert_eq!(json, page.slug());
        }
    }
}
