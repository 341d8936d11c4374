//! Chart Rendering
//!
//! The dashboard never draws anything itself. Sections describe charts with a
//! [`ChartSpec`] (kind, dataset, field mapping) and hand them to a
//! [`ChartRenderer`] together with the dataset rows.
//!
//! - **spec**: Chart kinds, field-to-channel mappings, point resolution
//! - **svg**: SVG markup for the HTML page
//! - **text**: Text bars for the terminal
//!
//! # Example
//!
//! ```rust
//! use aadhaar_insights::chart::{ChartKind, ChartRenderer, ChartSpec, FieldMapping, TextRenderer};
//! use aadhaar_insights::dataset::{DatasetName, DatasetRegistry};
//!
//! let spec = ChartSpec::new(
//!     ChartKind::BarHorizontal,
//!     DatasetName::TopStatesEnrollment,
//!     FieldMapping::new("region", "count"),
//! );
//! let dataset = DatasetRegistry::global().dataset(spec.dataset);
//! let text = TextRenderer::default().render(&spec, &dataset).unwrap();
//! assert!(text.contains("Uttar Pradesh"));
//! ```

pub mod error;
pub mod spec;
pub mod svg;
pub mod text;

pub use error::{ChartError, ChartResult};
pub use spec::{
    format_number, ChartKind, ChartPoint, ChartSpec, ColorChannel, FieldMapping, LabelFormat,
    PALETTE,
};
pub use svg::{SvgRenderer, MIN_CHART_HEIGHT, MIN_CHART_WIDTH};
pub use text::TextRenderer;

use crate::dataset::Dataset;

/// Draws a chart from records and a field mapping
///
/// Implementations keep no state between calls, so identical inputs always
/// produce identical output.
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec, dataset: &Dataset) -> ChartResult<String>;
}
