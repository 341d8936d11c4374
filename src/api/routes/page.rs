//! Page Route
//!
//! - GET / - Dashboard page for the active section
//! - GET /?section=<id> - Select a section, then render
//!
//! An unknown `section` leaves the selection unchanged and renders the page
//! with an empty section body.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::PageQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::route;
use crate::render::{render_page, PageOptions};

/// GET /
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Html<String>> {
    let (active, layout) = match query.section.as_deref() {
        Some(id) => {
            let mut view = state.view.write().await;
            let selected = view.select_by_id(id);
            if selected.is_none() {
                tracing::warn!(section = %id, "Unknown section requested, rendering empty body");
            }
            (view.active(), selected.map(route))
        }
        None => {
            let view = state.view.read().await;
            (view.active(), Some(view.layout()))
        }
    };

    let options = PageOptions {
        config: &state.config.dashboard,
        active,
        layout: layout.as_ref(),
    };

    let html = render_page(&options, state.registry)?;
    Ok(Html(html))
}
