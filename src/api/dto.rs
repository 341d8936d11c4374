//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dashboard::{Layout, Section};
use crate::dataset::{Dataset, DatasetName};

// ============================================
// SECTION DTOs
// ============================================

/// One entry in the section list
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub id: Section,
    pub label: &'static str,
    pub active: bool,
}

/// Section list response
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    pub sections: Vec<SectionSummary>,
    pub total: usize,
}

/// Current selection and its layout
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub section: Section,
    pub changed: bool,
    pub layout: Layout,
}

/// Section selection request
///
/// The identifier stays a string so unknown ids produce a validation error
/// rather than a body-parsing rejection.
#[derive(Debug, Deserialize)]
pub struct SelectSectionRequest {
    pub section: String,
}

/// Page query string (`/?section=biometric`)
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub section: Option<String>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset metadata
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub name: DatasetName,
    pub record: &'static str,
    pub rows: usize,
}

/// Dataset list response
#[derive(Debug, Serialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetSummary>,
    pub total: usize,
}

/// Full dataset response
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub name: DatasetName,
    pub record: &'static str,
    #[serde(flatten)]
    pub data: Dataset,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Number of registered datasets
    pub datasets: usize,
    /// Currently selected section
    pub active_section: Section,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
