//! Page View Models
//!
//! Serializable description of what a page shows. This is where rendering
//! stops; styling and layout belong to whatever consumes these.

use serde::Serialize;

use super::page::Page;
use super::state::PageRef;
use crate::records::RecordId;

/// A rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub page: PageRef,
    pub title: String,
    pub body: PageBody,
}

impl PageView {
    pub fn new(page: Page, title: impl Into<String>, body: PageBody) -> Self {
        Self {
            page: PageRef::from(page),
            title: title.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    /// The real-time KPI dashboard
    Dashboard(DashboardView),
    /// A plain page of static panels
    Panels { panels: Vec<Panel> },
}

/// Real-time dashboard contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub notifications: Vec<Notification>,
    pub admin_events: Vec<AdminEvent>,
    pub loading: bool,
    /// Absent while the load cycle is still running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<DashboardContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardContent {
    pub summary_cards: Vec<SummaryCard>,
    pub activity: ActivityChart,
    pub insight_cards: Vec<InsightCard>,
    pub rankings: Vec<RankedList>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminEvent {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
}

/// Hourly activity series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityChart {
    pub title: String,
    pub series: Vec<ChartSeries>,
    pub points: Vec<ActivityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Field of `ActivityPoint` holding the values
    pub key: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPoint {
    pub time: String,
    pub login: u32,
    pub meeting: u32,
}

/// One fetched insight shown as a notice card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightCard {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    pub title: String,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
}

impl RankedList {
    /// Rank entries 1..=n in the given order
    pub fn from_names(title: &str, names: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            entries: names
                .iter()
                .enumerate()
                .map(|(i, name)| RankedEntry {
                    rank: i + 1,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

/// A highlighted notice with an expandable detail list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub action: String,
    pub details: Panel,
}

/// A titled block of static content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    #[serde(flatten)]
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelBody {
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Columns {
        columns: Vec<Column>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub heading: String,
    pub items: Vec<String>,
}

impl Panel {
    pub fn bullets(title: &str, items: &[&str]) -> Self {
        Self::list(title, false, items)
    }

    pub fn numbered(title: &str, items: &[&str]) -> Self {
        Self::list(title, true, items)
    }

    fn list(title: &str, ordered: bool, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            body: PanelBody::List {
                ordered,
                items: to_strings(items),
            },
        }
    }

    pub fn table(title: &str, headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            title: title.to_string(),
            body: PanelBody::Table {
                headers: to_strings(headers),
                rows: rows.iter().map(|row| to_strings(row)).collect(),
            },
        }
    }

    pub fn columns(title: &str, columns: &[(&str, &[&str])]) -> Self {
        Self {
            title: title.to_string(),
            body: PanelBody::Columns {
                columns: columns
                    .iter()
                    .map(|(heading, items)| Column {
                        heading: heading.to_string(),
                        items: to_strings(items),
                    })
                    .collect(),
            },
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_serialization() {
        let panel = Panel::table("Scores", &["Name", "Score"], &[&["Kim Minseo", "98"]]);
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(value["title"], "Scores");
        assert_eq!(value["type"], "table");
        assert_eq!(value["headers"][1], "Score");
        assert_eq!(value["rows"][0][0], "Kim Minseo");

        let value = serde_json::to_value(Panel::numbered("Steps", &["a", "b"])).unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["ordered"], true);
        assert_eq!(value["items"][1], "b");
    }

    #[test]
    fn test_ranked_list() {
        let list = RankedList::from_names("Top", &["a", "b", "c"]);
        assert_eq!(list.entries.len(), 3);
        assert_eq!(list.entries[0].rank, 1);
        assert_eq!(list.entries[2].rank, 3);
        assert_eq!(list.entries[2].name, "c");
    }

    #[test]
    fn test_page_body_tag() {
        let view = PageView::new(Page::Reports, "Reports", PageBody::Panels { panels: vec![] });
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["page"]["slug"], "reports");
        assert_eq!(value["body"]["kind"], "panels");
    }
}
