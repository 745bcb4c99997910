//! Dashboard Controller
//!
//! Owns the view state. The current snapshot lives in a `watch` channel so
//! readers can either clone it or subscribe to every transition; only the
//! controller ever writes to it, and only through `dispatch`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::page::Page;
use super::render::{render, render_page};
use super::state::{DashboardEvent, DashboardState};
use super::view::PageView;
use crate::loader::DataLoader;

/// Result of dispatching an event
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: DashboardState,
    /// False when the event left the state as it was
    pub changed: bool,
}

/// Owns and mutates the dashboard view state
pub struct DashboardController {
    state_tx: watch::Sender<DashboardState>,
    loader: DataLoader,
    fixtures: Fixtures,
    mounted: AtomicBool,
}

impl DashboardController {
    /// Create a controller in the freshly mounted state (loading, default page)
    pub fn new(loader: DataLoader) -> Self {
        Self::with_fixtures(loader, Fixtures::default())
    }

    pub fn with_fixtures(loader: DataLoader, fixtures: Fixtures) -> Self {
        let (state_tx, _) = watch::channel(DashboardState::mounted());

        Self {
            state_tx,
            loader,
            fixtures,
            mounted: AtomicBool::new(false),
        }
    }

    /// Start the one and only load cycle
    ///
    /// Returns `None` if the cycle was already started. The spawned task is
    /// never cancelled; dropping the handle just detaches it.
    pub fn mount(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Dashboard already mounted, not reloading");
            return None;
        }

        tracing::info!(source = %self.loader.source_name(), "Mounting dashboard");

        Some(tokio::spawn(async move {
            let result = self.loader.load().await;
            self.dispatch(DashboardEvent::FetchSettled(result));
        }))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Name of the record source behind the loader
    pub fn source_name(&self) -> &str {
        self.loader.source_name()
    }

    /// Apply an event and publish the resulting snapshot
    pub fn dispatch(&self, event: DashboardEvent) -> Transition {
        let mut transition = None;

        self.state_tx.send_if_modified(|state| {
            let next = state.apply(event);
            let changed = next.page() != state.page()
                || next.is_loading() != state.is_loading()
                || next.loaded_at() != state.loaded_at();

            *state = next.clone();
            transition = Some(Transition {
                state: next,
                changed,
            });
            changed
        });

        transition.unwrap_or_else(|| Transition {
            state: self.state(),
            changed: false,
        })
    }

    /// Navigate to a page by label or slug
    ///
    /// Unknown identifiers leave the selection as it was.
    pub fn select_page(&self, id: &str) -> Transition {
        let transition = self.dispatch(DashboardEvent::PageSelected(id.to_string()));
        if transition.changed {
            tracing::info!(page = %transition.state.page(), "Page selected");
        }
        transition
    }

    /// Clone of the current snapshot
    pub fn state(&self) -> DashboardState {
        self.state_tx.borrow().clone()
    }

    /// Receive every future snapshot
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_tx.subscribe()
    }

    /// Wait for the load cycle to settle
    pub async fn settled(&self) -> DashboardState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives as long as `self`, so this is unreachable in practice
            Err(_) => self.state(),
        };
        settled
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Render the selected page
    pub fn render_current(&self) -> PageView {
        render(&self.state(), &self.fixtures)
    }

    /// Render any page without changing the selection
    pub fn render_page(&self, page: Page) -> PageView {
        render_page(page, &self.state(), &self.fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, MemorySource, RecordSource, Row};
    use crate::records::Table;
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use tokio::sync::Semaphore;

    /// Each fetch waits for a permit before answering
    struct HeldSource {
        permits: Arc<Semaphore>,
    }

    #[async_trait]
    impl RecordSource for HeldSource {
        fn name(&self) -> &str {
            "held"
        }

        async fn fetch_rows(&self, table: Table) -> Result<Vec<Row>, BackendError> {
            self.permits
                .acquire()
                .await
                .map_err(|_| BackendError::Unavailable)?
                .forget();
            match table {
                Table::Matches => Err(BackendError::Timeout),
                Table::Participants => Ok(vec![
                    json!({"id": "p-1", "is_identified": true, "satisfaction": 80}),
                    json!({"id": "p-2", "is_identified": false, "satisfaction": 90}),
                ]),
                _ => Ok(Vec::new()),
            }
        }
    }

    fn controller(source: impl RecordSource + 'static) -> Arc<DashboardController> {
        Arc::new(DashboardController::new(DataLoader::new(Arc::new(source))))
    }

    #[tokio::test]
    async fn test_loading_until_all_fetches_settle() {
        let permits = Arc::new(Semaphore::new(0));
        let controller = controller(HeldSource {
            permits: Arc::clone(&permits),
        });

        let handle = Arc::clone(&controller).mount().unwrap();
        assert!(controller.state().is_loading());

        // Let five of the six fetches through
        permits.add_permits(5);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(controller.state().is_loading());

        permits.add_permits(1);
        handle.await.unwrap();

        let state = controller.state();
        assert!(!state.is_loading());
        assert_eq!(state.collections().participants.len(), 2);
        assert!(state.collections().matches.is_empty());
        assert_eq!(state.summary().total_identified, 1);
        assert_eq!(state.summary().avg_satisfaction, 85);
    }

    #[tokio::test]
    async fn test_mount_only_once() {
        let controller = controller(MemorySource::new());

        let handle = Arc::clone(&controller).mount();
        assert!(handle.is_some());
        assert!(controller.is_mounted());
        assert!(Arc::clone(&controller).mount().is_none());

        handle.unwrap().await.unwrap();
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn test_settled_waits_for_load() {
        let controller = controller(
            MemorySource::new().with_rows(Table::Meetings, vec![json!({"id": "mt-1"})]),
        );
        Arc::clone(&controller).mount();

        let state = tokio::time::timeout(Duration::from_secs(5), controller.settled())
            .await
            .unwrap();
        assert!(!state.is_loading());
        assert_eq!(state.summary().total_meetings, 1);
    }

    #[tokio::test]
    async fn test_settled_after_load_returns_at_once() {
        let controller = controller(MemorySource::new());
        Arc::clone(&controller).mount().unwrap().await.unwrap();

        // Called again once already settled, and from several waiters
        let (a, b) = tokio::join!(controller.settled(), controller.settled());
        assert!(!a.is_loading());
        assert!(!b.is_loading());
        assert_eq!(a.summary().total_participants, 150);
    }

    #[tokio::test]
    async fn test_select_page() {
        let controller = controller(MemorySource::new());

        let t = controller.select_page("Reports");
        assert!(t.changed);
        assert_eq!(t.state.page(), Page::Reports);

        let t = controller.select_page("reports");
        assert!(!t.changed);

        let t = controller.select_page("No Such Page");
        assert!(!t.changed);
        assert_eq!(t.state.page(), Page::Reports);
        assert_eq!(controller.state().page(), Page::Reports);
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let controller = controller(MemorySource::new());
        let mut rx = controller.subscribe();

        controller.select_page("Meeting Monitoring");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().page(), Page::MeetingMonitoring);

        // An ignored selection publishes nothing
        controller.select_page("nowhere");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_render_current_follows_selection() {
        let controller = controller(MemorySource::new());
        assert_eq!(controller.render_current().title, "REAL-TIME KPI DASHBOARD");

        controller.select_page("ai-matching-settings");
        assert_eq!(controller.render_current().title, "AI Matching Settings");
        assert_eq!(controller.render_page(Page::Reports).title, "Reports");
        assert_eq!(controller.state().page(), Page::AiMatchingSettings);
    }
}
