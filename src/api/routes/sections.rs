//! Section Routes
//!
//! - GET /api/v1/sections - List sections
//! - GET /api/v1/sections/:id - Layout of one section
//! - GET /api/v1/view - Current selection
//! - PUT /api/v1/view - Change the selection

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SectionListResponse, SectionSummary, SelectSectionRequest, ViewResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{route_id, Layout, Section};

/// GET /api/v1/sections
pub async fn list_sections(State(state): State<Arc<AppState>>) -> Json<SectionListResponse> {
    let active = state.view.read().await.active();

    let sections: Vec<SectionSummary> = Section::all()
        .iter()
        .map(|section| SectionSummary {
            id: *section,
            label: section.label(),
            active: *section == active,
        })
        .collect();

    Json(SectionListResponse {
        total: sections.len(),
        sections,
    })
}

/// GET /api/v1/sections/:id
///
/// Layout for any section, without changing the selection.
pub async fn get_section(Path(id): Path<String>) -> ApiResult<Json<Layout>> {
    route_id(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Section '{}' not found", id)))
}

/// GET /api/v1/view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewResponse> {
    let view = state.view.read().await;

    Json(ViewResponse {
        section: view.active(),
        changed: false,
        layout: view.layout(),
    })
}

/// PUT /api/v1/view
pub async fn select_view(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectSectionRequest>,
) -> ApiResult<Json<ViewResponse>> {
    let section: Section = req
        .section
        .parse()
        .map_err(|e: crate::dashboard::UnknownSection| ApiError::Validation(e.to_string()))?;

    let mut view = state.view.write().await;
    let changed = view.select_section(section);

    tracing::info!(section = %section, changed, "View selection updated");

    Ok(Json(ViewResponse {
        section,
        changed,
        layout: view.layout(),
    }))
}
