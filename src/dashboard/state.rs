//! Dashboard State
//!
//! Immutable view-state snapshots and the two events that move between
//! them. `DashboardState::apply` is a pure reducer: it never touches the
//! snapshot it is called on.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use super::page::Page;
use super::summary::SummaryMetrics;
use crate::loader::{LoadReport, LoadResult};
use crate::records::{CollectionSizes, Collections};

/// A discrete state transition
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// All six fetches of the load cycle have settled
    FetchSettled(LoadResult),
    /// The user picked a page from the menu (label or slug)
    PageSelected(String),
}

/// One view-state snapshot
#[derive(Debug, Clone)]
pub struct DashboardState {
    page: Page,
    loading: bool,
    collections: Arc<Collections>,
    report: Option<Arc<LoadReport>>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::mounted()
    }
}

impl DashboardState {
    /// State right after mount: default page, loading, no data yet
    pub fn mounted() -> Self {
        Self {
            page: Page::default(),
            loading: true,
            collections: Arc::new(Collections::default()),
            report: None,
            loaded_at: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    pub fn report(&self) -> Option<&LoadReport> {
        self.report.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn summary(&self) -> SummaryMetrics {
        SummaryMetrics::derive(&self.collections)
    }

    /// Produce the next snapshot for an event
    pub fn apply(&self, event: DashboardEvent) -> DashboardState {
        match event {
            DashboardEvent::FetchSettled(result) => DashboardState {
                loading: false,
                collections: Arc::new(result.collections),
                report: Some(Arc::new(result.report)),
                loaded_at: Some(Utc::now()),
                ..self.clone()
            },
            DashboardEvent::PageSelected(id) => match id.parse::<Page>() {
                Ok(page) => DashboardState {
                    page,
                    ..self.clone()
                },
                Err(e) => {
                    tracing::warn!(error = %e, current = %self.page, "Ignoring page selection");
                    self.clone()
                }
            },
        }
    }

    /// Serializable view of this state
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            page: PageRef::from(self.page),
            loading: self.loading,
            loaded_at: self.loaded_at,
            sizes: self.collections.sizes(),
            summary: self.summary(),
        }
    }
}

/// A page as exposed to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRef {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<Page> for PageRef {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug(),
            label: page.label(),
        }
    }
}

/// Serializable summary of a state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub page: PageRef,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
    pub sizes: CollectionSizes,
    pub summary: SummaryMetrics,
}
