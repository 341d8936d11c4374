//! # Aadhaar Insights
//!
//! Analytics dashboard over precomputed Aadhaar enrollment, biometric and
//! demographic update statistics.
//!
//! ## Features
//!
//! - **Static datasets**: Fixed tables compiled into the binary, read-only
//! - **Section router**: Pure mapping from a section to its cards and panels
//! - **Chart collaborator**: Declarative chart specs drawn as SVG or text
//! - **Server-side pages**: Self-contained HTML dashboard, no scripts needed
//!
//! ## Modules
//!
//! - [`dataset`]: Record types and the dataset registry
//! - [`dashboard`]: Sections, view state, cards and the router
//! - [`chart`]: Chart specs and renderers
//! - [`render`]: HTML page and terminal report
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use aadhaar_insights::dashboard::{Section, ViewState};
//! use aadhaar_insights::dataset::DatasetName;
//!
//! let mut view = ViewState::new();
//! assert_eq!(view.active(), Section::Overview);
//!
//! view.select_section(Section::Biometric);
//! let layout = view.layout();
//!
//! assert_eq!(layout.cards[2].value, "5.1%");
//! assert_eq!(layout.datasets(), vec![DatasetName::AgeDistributionBiometric]);
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;
pub mod render;

// Re-export top-level types for convenience
pub use dataset::{Dataset, DatasetName, DatasetRegistry, FieldValue, Record};

pub use dashboard::{
    route, route_id, Accent, Layout, Panel, PanelContent, Section, StatCard, UnknownSection,
    ViewState, HEADER_CARDS,
};

pub use chart::{
    ChartError, ChartKind, ChartRenderer, ChartResult, ChartSpec, FieldMapping, SvgRenderer,
    TextRenderer,
};

pub use render::{render_page, render_text, PageOptions};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DashboardConfig, LoadedConfig, LoggingConfig, ServerConfig};
