//! Chart Specifications
//!
//! Declarative description of a chart: which dataset feeds it, which record
//! fields map to which visual channel, and what kind of chart to draw.

use serde::Serialize;

use crate::dataset::{Dataset, DatasetName, Record};

use super::error::{ChartError, ChartResult};

/// Series colors, indexed by position plus a palette offset
pub const PALETTE: [&str; 8] = [
    "#3b82f6", // Blue
    "#ef4444", // Red
    "#10b981", // Emerald
    "#f59e0b", // Amber
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#06b6d4", // Cyan
    "#84cc16", // Lime
];

/// Chart kind tag
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    BarHorizontal,
    BarVertical,
    Area,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::BarHorizontal => write!(f, "bar-horizontal"),
            ChartKind::BarVertical => write!(f, "bar-vertical"),
            ChartKind::Area => write!(f, "area"),
        }
    }
}

/// How each point gets its color
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorChannel {
    /// `PALETTE[(index + offset) % PALETTE.len()]`
    Palette { offset: usize },
    /// One color for every point
    Fixed(&'static str),
}

impl ColorChannel {
    /// Resolve the color for the point at `index`
    pub fn color_for(&self, index: usize) -> &'static str {
        match self {
            ColorChannel::Palette { offset } => PALETTE[(index + offset) % PALETTE.len()],
            ColorChannel::Fixed(color) => *color,
        }
    }
}

/// Per-point label text
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    None,
    /// The formatted numeric value
    Value,
    /// `"{category}: {percentage}%"`, read from the record's `percentage` field
    NameAndPercentage,
}

/// Record field to visual channel binding
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldMapping {
    /// Text field drawn on the category axis (or as slice names)
    pub category: &'static str,
    /// Numeric field drawn on the value axis (or as slice sizes)
    pub value: &'static str,
    pub color: ColorChannel,
    pub label: LabelFormat,
    /// Legend/tooltip name for the value series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<&'static str>,
}

impl FieldMapping {
    pub fn new(category: &'static str, value: &'static str) -> Self {
        Self {
            category,
            value,
            color: ColorChannel::Palette { offset: 0 },
            label: LabelFormat::None,
            series_name: None,
        }
    }

    /// Builder method: set the color channel
    pub fn color(mut self, color: ColorChannel) -> Self {
        self.color = color;
        self
    }

    /// Builder method: set the label format
    pub fn label(mut self, label: LabelFormat) -> Self {
        self.label = label;
        self
    }

    /// Builder method: name the value series
    pub fn series(mut self, name: &'static str) -> Self {
        self.series_name = Some(name);
        self
    }
}

/// A chart bound to one dataset
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: DatasetName,
    pub mapping: FieldMapping,
}

/// One resolved point, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub category: &'static str,
    pub value: f64,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, dataset: DatasetName, mapping: FieldMapping) -> Self {
        Self { kind, dataset, mapping }
    }

    /// Bind the mapping to each record of `dataset`, preserving row order
    pub fn resolve(&self, dataset: &Dataset) -> ChartResult<Vec<ChartPoint>> {
        dataset
            .records()
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.resolve_record(index, record))
            .collect()
    }

    fn resolve_record(&self, index: usize, record: &dyn Record) -> ChartResult<ChartPoint> {
        let mapping = &self.mapping;

        let category = record
            .field(mapping.category)
            .ok_or_else(|| self.missing(mapping.category))?
            .as_text()
            .ok_or_else(|| self.mistyped(mapping.category, "text"))?;

        let value = record
            .field(mapping.value)
            .ok_or_else(|| self.missing(mapping.value))?
            .as_number()
            .ok_or_else(|| self.mistyped(mapping.value, "number"))?;

        let label = match mapping.label {
            LabelFormat::None => None,
            LabelFormat::Value => Some(format_number(value)),
            LabelFormat::NameAndPercentage => {
                let percentage = record
                    .field("percentage")
                    .ok_or_else(|| self.missing("percentage"))?
                    .as_number()
                    .ok_or_else(|| self.mistyped("percentage", "number"))?;
                Some(format!("{}: {}%", category, percentage))
            }
        };

        Ok(ChartPoint {
            category,
            value,
            color: mapping.color.color_for(index),
            label,
        })
    }

    fn missing(&self, field: &str) -> ChartError {
        ChartError::UnknownField {
            dataset: self.dataset,
            field: field.to_string(),
        }
    }

    fn mistyped(&self, field: &str, expected: &'static str) -> ChartError {
        ChartError::FieldType {
            dataset: self.dataset,
            field: field.to_string(),
            expected,
        }
    }
}

/// Compact number formatting for labels and axes
///
/// Integers print without decimals and with thousands separators; fractional
/// values keep up to three decimals with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let digits = format!("{}", value.abs() as u64);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if value < 0.0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    } else {
        let fixed = format!("{:.3}", value);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
