//! Page Routes
//!
//! Navigation between the seven dashboard pages and their rendered view
//! models.
//!
//! - GET /api/v1/pages - Menu entries
//! - GET /api/v1/pages/current - Rendered selected page
//! - GET /api/v1/pages/:page - Rendered page by label or slug
//! - POST /api/v1/pages/select - Change the selected page

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PageEntry, PageListResponse, SelectPageRequest, SelectPageResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{Page, PageView};

/// GET /api/v1/pages
///
/// All pages in menu order, with the selected one flagged.
pub async fn list_pages(State(state): State<Arc<AppState>>) -> Json<PageListResponse> {
    let current = state.controller.state().page();

    let pages = Page::ALL
        .iter()
        .map(|page| PageEntry {
            slug: page.slug().to_string(),
            label: page.label().to_string(),
            active: *page == current,
        })
        .collect();

    Json(PageListResponse { pages })
}

/// GET /api/v1/pages/current
pub async fn current_page(State(state): State<Arc<AppState>>) -> Json<PageView> {
    Json(state.controller.render_current())
}

/// GET /api/v1/pages/:page
///
/// Renders without touching the selection.
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PageView>> {
    let page: Page = id.parse()?;
    Ok(Json(state.controller.render_page(page)))
}

/// POST /api/v1/pages/select
///
/// Unknown or blank pages are not an error: the selection stays as it was
/// and the response carries `changed: false`.
pub async fn select_page(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectPageRequest>,
) -> Json<SelectPageResponse> {
    let transition = state.controller.select_page(&request.page);

    Json(SelectPageResponse {
        changed: transition.changed,
        snapshot: transition.state.snapshot(),
    })
}
