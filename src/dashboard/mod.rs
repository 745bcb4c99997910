//! Dashboard View State
//!
//! The view controller of the admin dashboard: which page is selected,
//! what the loaded collections say, and what each page shows.
//!
//! ## Architecture
//!
//! - **DashboardState**: immutable snapshot, advanced by `apply(event)`
//! - **DashboardController**: owns the snapshot, runs the single load cycle
//! - **SummaryMetrics**: headline numbers with fixed fallbacks
//! - **render**: pure (page, state, fixtures) → `PageView`
//!
//! ## Transitions
//!
//! 1. Mount: page = Real-Time Dashboard, loading = true
//! 2. `FetchSettled`: collections replaced wholesale, loading = false
//! 3. `PageSelected`: page changes if the identifier is known, else nothing

mod controller;
mod fixtures;
mod page;
mod render;
mod state;
mod summary;
mod view;

pub use controller::{DashboardController, Transition};
pub use fixtures::Fixtures;
pub use page::{Page, UnknownPage};
pub use render::{render, render_page};
pub use state::{DashboardEvent, DashboardSnapshot, DashboardState, PageRef};
pub use summary::{
    SummaryMetrics, FALLBACK_AVG_SATISFACTION, FALLBACK_TOTAL_IDENTIFIED,
    FALLBACK_TOTAL_MATCHES, FALLBACK_TOTAL_MEETINGS, FALLBACK_TOTAL_PARTICIPANTS, PEAK,
};
pub use view::{
    ActivityChart, ActivityPoint, AdminEvent, ChartSeries, Column, DashboardContent,
    DashboardView, InsightCard, Notice, Notification, PageBody, PageView, Panel, PanelBody,
    RankedEntry, RankedList, SummaryCard,
};
