//! Dataset Routes
//!
//! Read-only access to the static tables.
//!
//! - GET /api/v1/datasets - List datasets
//! - GET /api/v1/datasets/:name - Rows of one dataset

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DatasetListResponse, DatasetResponse, DatasetSummary};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::DatasetName;

/// GET /api/v1/datasets
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Json<DatasetListResponse> {
    let datasets: Vec<DatasetSummary> = state
        .registry
        .names()
        .map(|name| {
            let data = state.registry.dataset(name);
            DatasetSummary {
                name,
                record: data.record_kind(),
                rows: data.len(),
            }
        })
        .collect();

    Json(DatasetListResponse {
        total: datasets.len(),
        datasets,
    })
}

/// GET /api/v1/datasets/:name
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<DatasetResponse>> {
    let data = state
        .registry
        .get(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Dataset '{}' not found", name)))?;

    // Registry keys and DatasetName are the same set
    let name = DatasetName::from_name(&name)
        .ok_or_else(|| ApiError::Internal(format!("Dataset '{}' has no typed name", name)))?;

    Ok(Json(DatasetResponse {
        name,
        record: data.record_kind(),
        data,
    }))
}
