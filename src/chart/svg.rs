//! SVG Chart Renderer
//!
//! Draws pie, bar and area charts as standalone `<svg>` markup for embedding
//! in the dashboard page.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::dataset::Dataset;
use crate::render::escape_html;

use super::error::ChartResult;
use super::spec::{format_number, ChartKind, ChartPoint, ChartSpec};
use super::ChartRenderer;

const GRID_COLOR: &str = "#f1f5f9";
const AXIS_TEXT_COLOR: &str = "#64748b";
const EMPTY_TEXT_COLOR: &str = "#6b7280";
const GRID_LINES: usize = 5;

/// Narrowest canvas that fits the bar-chart label and value margins
pub const MIN_CHART_WIDTH: u32 = 240;
/// Shortest canvas that fits the axis margins and pie legend
pub const MIN_CHART_HEIGHT: u32 = 120;

/// Renders charts to SVG markup of a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
        }
    }
}

impl SvgRenderer {
    /// Sizes below the minimum are raised to it
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_CHART_WIDTH),
            height: height.max(MIN_CHART_HEIGHT),
        }
    }

    fn open(&self, spec: &ChartSpec) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" class="chart chart-{kind}" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" data-dataset="{dataset}">"##,
            kind = spec.kind,
            w = self.width,
            h = self.height,
            dataset = spec.dataset,
        )
    }

    fn empty(&self, spec: &ChartSpec) -> String {
        format!(
            r##"{open}<text x="{x}" y="{y}" text-anchor="middle" font-size="16" fill="{color}">No data</text></svg>"##,
            open = self.open(spec),
            x = self.width / 2,
            y = self.height / 2,
            color = EMPTY_TEXT_COLOR,
        )
    }

    fn pie(&self, spec: &ChartSpec, points: &[ChartPoint]) -> String {
        let width = self.width as f64;
        let height = self.height as f64;
        let legend_height = 36.0;

        let cx = width / 2.0;
        let cy = (height - legend_height) / 2.0;
        let radius = (cx.min(cy) - 24.0).max(8.0);
        let total: f64 = points.iter().map(|p| p.value).sum();

        let mut body = String::new();

        if total <= 0.0 {
            return self.empty(spec);
        }

        let mut start = -PI / 2.0;
        for point in points {
            let sweep = point.value / total * 2.0 * PI;
            let end = start + sweep;

            if sweep >= 2.0 * PI - 1e-9 {
                let _ = write!(
                    body,
                    r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"##,
                    cx, cy, radius, point.color
                );
            } else {
                let (x1, y1) = (cx + radius * start.cos(), cy + radius * start.sin());
                let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
                let large_arc = if sweep > PI { 1 } else { 0 };
                let _ = write!(
                    body,
                    r##"<path d="M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 {} 1 {:.1} {:.1} Z" fill="{}" stroke="#ffffff" stroke-width="2"><title>{}: {}</title></path>"##,
                    cx, cy, x1, y1, radius, radius, large_arc, x2, y2, point.color,
                    escape_html(point.category),
                    format_number(point.value),
                );
            }

            if let Some(label) = &point.label {
                let mid = start + sweep / 2.0;
                let lx = cx + (radius + 14.0) * mid.cos();
                let ly = cy + (radius + 14.0) * mid.sin();
                let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };
                let _ = write!(
                    body,
                    r##"<text x="{:.1}" y="{:.1}" text-anchor="{}" font-size="12" fill="{}">{}</text>"##,
                    lx, ly, anchor, point.color, escape_html(label)
                );
            }

            start = end;
        }

        body.push_str(&self.legend(points, height - legend_height / 2.0));
        format!("{}{}</svg>", self.open(spec), body)
    }

    fn legend(&self, points: &[ChartPoint], y: f64) -> String {
        let slot = self.width as f64 / points.len().max(1) as f64;
        let mut legend = String::new();
        for (i, point) in points.iter().enumerate() {
            let x = slot * i as f64 + 12.0;
            let _ = write!(
                legend,
                r##"<rect x="{:.1}" y="{:.1}" width="10" height="10" rx="2" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="12" fill="{}">{}</text>"##,
                x,
                y - 8.0,
                point.color,
                x + 14.0,
                y + 1.0,
                AXIS_TEXT_COLOR,
                escape_html(point.category)
            );
        }
        legend
    }

    fn bar_horizontal(&self, spec: &ChartSpec, points: &[ChartPoint]) -> String {
        let width = self.width as f64;
        let height = self.height as f64;
        let margin_left = 160.0;
        let margin_right = 70.0;
        let margin_y = 12.0;

        let chart_width = width - margin_left - margin_right;
        let row_height = (height - 2.0 * margin_y) / points.len() as f64;
        let bar_height = (row_height * 0.6).min(24.0);
        let max = max_value(points);

        let mut body = String::new();

        // Vertical grid lines
        for i in 0..=GRID_LINES {
            let x = margin_left + (i as f64 / GRID_LINES as f64) * chart_width;
            let _ = write!(
                body,
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-dasharray="3 3"/>"##,
                x, margin_y, x, height - margin_y, GRID_COLOR
            );
        }

        for (i, point) in points.iter().enumerate() {
            let y = margin_y + i as f64 * row_height + (row_height - bar_height) / 2.0;
            let bar_width = point.value / max * chart_width;
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="{}">{}</text>"##,
                margin_left - 8.0,
                y + bar_height / 2.0 + 4.0,
                AXIS_TEXT_COLOR,
                escape_html(point.category)
            );
            let _ = write!(
                body,
                r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="{}"><title>{}</title></rect>"##,
                margin_left,
                y,
                bar_width,
                bar_height,
                point.color,
                escape_html(&tooltip(spec, point))
            );
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" font-size="11" fill="{}">{}</text>"##,
                margin_left + bar_width + 6.0,
                y + bar_height / 2.0 + 4.0,
                AXIS_TEXT_COLOR,
                escape_html(&point_label(point))
            );
        }

        format!("{}{}</svg>", self.open(spec), body)
    }

    fn bar_vertical(&self, spec: &ChartSpec, points: &[ChartPoint]) -> String {
        let (plot, mut body) = self.value_axis(points);

        let slot = plot.width / points.len() as f64;
        let bar_width = (slot * 0.6).min(80.0);

        for (i, point) in points.iter().enumerate() {
            let x = plot.left + i as f64 * slot + (slot - bar_width) / 2.0;
            let bar_height = point.value / plot.max * plot.height;
            let y = plot.top + plot.height - bar_height;
            let _ = write!(
                body,
                r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="{}"><title>{}</title></rect>"##,
                x,
                y,
                bar_width,
                bar_height,
                point.color,
                escape_html(&tooltip(spec, point))
            );
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
                x + bar_width / 2.0,
                plot.top + plot.height + 18.0,
                AXIS_TEXT_COLOR,
                escape_html(point.category)
            );
            if let Some(label) = &point.label {
                let _ = write!(
                    body,
                    r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{}">{}</text>"##,
                    x + bar_width / 2.0,
                    y - 6.0,
                    AXIS_TEXT_COLOR,
                    escape_html(label)
                );
            }
        }

        format!("{}{}</svg>", self.open(spec), body)
    }

    fn area(&self, spec: &ChartSpec, points: &[ChartPoint]) -> String {
        let (plot, mut body) = self.value_axis(points);

        let step = if points.len() > 1 {
            plot.width / (points.len() - 1) as f64
        } else {
            0.0
        };
        let baseline = plot.top + plot.height;
        let color = points[0].color;

        let coords: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = plot.left + i as f64 * step;
                let y = plot.top + (1.0 - p.value / plot.max) * plot.height;
                (x, y)
            })
            .collect();

        let line: Vec<String> = coords
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        let first_x = coords[0].0;
        let last_x = coords[coords.len() - 1].0;

        let _ = write!(
            body,
            r##"<polygon points="{:.1},{:.1} {} {:.1},{:.1}" fill="{}" fill-opacity="0.1"/>"##,
            first_x,
            baseline,
            line.join(" "),
            last_x,
            baseline,
            color
        );
        let _ = write!(
            body,
            r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="3"/>"##,
            line.join(" "),
            color
        );

        for ((x, y), point) in coords.iter().zip(points) {
            let _ = write!(
                body,
                r##"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}</title></circle>"##,
                x,
                y,
                color,
                escape_html(&tooltip(spec, point))
            );
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
                x,
                baseline + 18.0,
                AXIS_TEXT_COLOR,
                escape_html(point.category)
            );
        }

        format!("{}{}</svg>", self.open(spec), body)
    }

    /// Horizontal grid and value labels shared by vertical bars and areas
    fn value_axis(&self, points: &[ChartPoint]) -> (Plot, String) {
        let width = self.width as f64;
        let height = self.height as f64;
        let plot = Plot {
            left: 70.0,
            top: 16.0,
            width: width - 70.0 - 20.0,
            height: height - 16.0 - 32.0,
            max: max_value(points),
        };

        let mut body = String::new();
        for i in 0..=GRID_LINES {
            let y = plot.top + (i as f64 / GRID_LINES as f64) * plot.height;
            let value = plot.max * (1.0 - i as f64 / GRID_LINES as f64);
            let _ = write!(
                body,
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-dasharray="3 3"/>"##,
                plot.left,
                y,
                plot.left + plot.width,
                y,
                GRID_COLOR
            );
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{}">{}</text>"##,
                plot.left - 8.0,
                y + 4.0,
                AXIS_TEXT_COLOR,
                format_number(value.round())
            );
        }
        (plot, body)
    }
}

/// Plot area for axis-based charts
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
}

fn max_value(points: &[ChartPoint]) -> f64 {
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn point_label(point: &ChartPoint) -> String {
    point
        .label
        .clone()
        .unwrap_or_else(|| format_number(point.value))
}

fn tooltip(spec: &ChartSpec, point: &ChartPoint) -> String {
    match spec.mapping.series_name {
        Some(series) => format!("{} - {}: {}", point.category, series, format_number(point.value)),
        None => format!("{}: {}", point.category, format_number(point.value)),
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, spec: &ChartSpec, dataset: &Dataset) -> ChartResult<String> {
        let points = spec.resolve(dataset)?;
        if points.is_empty() {
            return Ok(self.empty(spec));
        }

        Ok(match spec.kind {
            ChartKind::Pie => self.pie(spec, &points),
            ChartKind::BarHorizontal => self.bar_horizontal(spec, &points),
            ChartKind::BarVertical => self.bar_vertical(spec, &points),
            ChartKind::Area => self.area(spec, &points),
        })
    }
}
