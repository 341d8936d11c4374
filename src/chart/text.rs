//! Terminal chart renderer
//!
//! Plain-text bars for the CLI. Every chart kind becomes a list of labelled
//! bars; pies show each slice's share instead of its raw value.

use std::fmt::Write as _;

use crate::dataset::Dataset;

use super::error::ChartResult;
use super::spec::{format_number, ChartKind, ChartSpec};
use super::ChartRenderer;

/// Renders charts as fixed-width text bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Maximum bar length in characters
    pub width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl ChartRenderer for TextRenderer {
    fn render(&self, spec: &ChartSpec, dataset: &Dataset) -> ChartResult<String> {
        let points = spec.resolve(dataset)?;
        if points.is_empty() {
            return Ok("  (no data)\n".to_string());
        }

        let label_width = points
            .iter()
            .map(|p| p.category.chars().count())
            .max()
            .unwrap_or(0);
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
        let total: f64 = points.iter().map(|p| p.value).sum();

        let mut out = String::new();
        for point in &points {
            let scale = if max > 0.0 { point.value / max } else { 0.0 };
            let filled = (scale * self.width as f64).round() as usize;
            let bar = "█".repeat(filled.max(if point.value > 0.0 { 1 } else { 0 }));

            let value = match (spec.kind, &point.label) {
                (_, Some(label)) => label.clone(),
                (ChartKind::Pie, None) if total > 0.0 => format!(
                    "{} ({:.1}%)",
                    format_number(point.value),
                    point.value / total * 100.0
                ),
                _ => format_number(point.value),
            };

            let _ = writeln!(
                out,
                "  {:<label_width$}  {:<bar_width$}  {}",
                point.category,
                bar,
                value,
                label_width = label_width,
                bar_width = self.width,
            );
        }

        if let Some(series) = spec.mapping.series_name {
            let _ = writeln!(out, "  [{}]", series);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{FieldMapping, LabelFormat};
    use crate::dataset::{DatasetName, DatasetRegistry};

    #[test]
    fn test_longest_bar_is_full_width() {
        let spec = ChartSpec::new(
            ChartKind::BarHorizontal,
            DatasetName::TopStatesEnrollment,
            FieldMapping::new("region", "count"),
        );
        let dataset = DatasetRegistry::global().dataset(spec.dataset);
        let text = TextRenderer::new(20).render(&spec, &dataset).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("Uttar Pradesh"));
        assert_eq!(lines[0].matches('█').count(), 20);
        assert!(lines[0].ends_with("670,426"));
        assert!(lines[9].contains("Tamil Nadu"));
    }

    #[test]
    fn test_pie_shows_share() {
        let spec = ChartSpec::new(
            ChartKind::Pie,
            DatasetName::AgeDistributionBiometric,
            FieldMapping::new("name", "value"),
        );
        let dataset = DatasetRegistry::global().dataset(spec.dataset);
        let text = TextRenderer::default().render(&spec, &dataset).unwrap();
        assert!(text.contains("(49.1%)"));
        assert!(text.contains("(50.9%)"));
    }

    #[test]
    fn test_labels_take_precedence() {
        let spec = ChartSpec::new(
            ChartKind::Pie,
            DatasetName::AgeDistributionBiometric,
            FieldMapping::new("name", "value").label(LabelFormat::NameAndPercentage),
        );
        let dataset = DatasetRegistry::global().dataset(spec.dataset);
        let text = TextRenderer::default().render(&spec, &dataset).unwrap();
        assert!(text.contains("Youth (5-17): 49.06%"));
    }
}
