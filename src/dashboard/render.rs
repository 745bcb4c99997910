//! Page rendering
//!
//! Pure functions from (page, state, fixtures) to a `PageView`.

use super::fixtures::Fixtures;
use super::page::Page;
use super::state::DashboardState;
use super::summary::SummaryMetrics;
use super::view::{DashboardContent, DashboardView, InsightCard, PageBody, PageView, SummaryCard};
use crate::records::Insight;

/// Render the currently selected page
pub fn render(state: &DashboardState, fixtures: &Fixtures) -> PageView {
    render_page(state.page(), state, fixtures)
}

/// Render any page against a state, regardless of which page is selected
pub fn render_page(page: Page, state: &DashboardState, fixtures: &Fixtures) -> PageView {
    match page {
        Page::RealTimeDashboard => PageView::new(
            page,
            "REAL-TIME KPI DASHBOARD",
            PageBody::Dashboard(dashboard_view(state, fixtures)),
        ),
        _ => PageView::new(
            page,
            page.label(),
            PageBody::Panels {
                panels: fixtures.panels(page).to_vec(),
            },
        ),
    }
}

fn dashboard_view(state: &DashboardState, fixtures: &Fixtures) -> DashboardView {
    let content = if state.is_loading() {
        None
    } else {
        Some(DashboardContent {
            summary_cards: summary_cards(&state.summary(), fixtures),
            activity: fixtures.activity.clone(),
            insight_cards: state.collections().insights.iter().map(insight_card).collect(),
            rankings: vec![
                fixtures.top_matches.clone(),
                fixtures.anticipated_meetings.clone(),
            ],
            notices: fixtures.notices.clone(),
        })
    };

    DashboardView {
        notifications: fixtures.notifications.clone(),
        admin_events: fixtures.admin_events.clone(),
        loading: state.is_loading(),
        content,
    }
}

fn summary_cards(summary: &SummaryMetrics, fixtures: &Fixtures) -> Vec<SummaryCard> {
    let card = |label: &str, value: String| SummaryCard {
        label: label.to_string(),
        value,
    };

    vec![
        card("Total Participants", summary.total_participants.to_string()),
        card(
            "Real-Time Identified",
            format!("{} ({})", summary.total_identified, fixtures.identified_share),
        ),
        card("Total Matches", summary.total_matches.to_string()),
        card("Average Satisfaction", format!("{}%", summary.avg_satisfaction)),
        card("Total Meetings", summary.total_meetings.to_string()),
        card("Peak", summary.peak.to_string()),
    ]
}

fn insight_card(insight: &Insight) -> InsightCard {
    InsightCard {
        id: insight.id.clone(),
        title: insight.title(),
        description: insight.description.clone(),
        action: insight.action_link.clone(),
    }
}
