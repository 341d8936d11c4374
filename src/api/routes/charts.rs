//! Chart Routes
//!
//! - GET /api/v1/charts/:section/:index - SVG of one chart panel
//!
//! `index` counts chart panels only, in display order.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::{ChartRenderer, SvgRenderer};
use crate::dashboard::route_id;

/// GET /api/v1/charts/:section/:index
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path((section, index)): Path<(String, usize)>,
) -> ApiResult<impl IntoResponse> {
    let layout = route_id(&section)
        .ok_or_else(|| ApiError::NotFound(format!("Section '{}' not found", section)))?;

    let chart = layout.chart(index).ok_or_else(|| {
        ApiError::NotFound(format!("Section '{}' has no chart {}", section, index))
    })?;

    let dashboard = &state.config.dashboard;
    let renderer = SvgRenderer::new(dashboard.chart_width, dashboard.chart_height);
    let svg = renderer.render(chart, &state.registry.dataset(chart.dataset))?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
