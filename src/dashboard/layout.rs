//! Layout description produced by the section router
//!
//! A layout says which cards and panels a section shows and which dataset
//! feeds each chart. It carries no rendered output.

use serde::Serialize;

use crate::chart::ChartSpec;
use crate::dataset::DatasetName;

use super::card::{Accent, StatCard};
use super::section::Section;

/// Severity of a highlighted finding
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Warning,
    Critical,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Critical => "critical",
        }
    }

    /// Single-character marker for text output
    pub fn marker(&self) -> &'static str {
        match self {
            Tone::Info => "i",
            Tone::Success => "✓",
            Tone::Warning => "!",
            Tone::Critical => "✗",
        }
    }
}

/// Highlighted finding shown above a chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Callout {
    pub tone: Tone,
    /// Bold lead-in, e.g. "Anomaly:"
    pub lead: &'static str,
    pub text: &'static str,
}

/// One bullet in an insight group
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Insight {
    pub tone: Tone,
    pub text: &'static str,
}

/// A titled list of findings for one subsystem
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsightGroup {
    pub title: &'static str,
    pub accent: Accent,
    pub items: Vec<Insight>,
}

/// What a panel displays
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelContent {
    Chart { chart: ChartSpec },
    Insights { groups: Vec<InsightGroup> },
}

/// A titled block in a section body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<Callout>,
    /// Spans the full row width
    pub wide: bool,
    pub content: PanelContent,
}

impl Panel {
    /// A chart panel
    pub fn chart(title: &'static str, chart: ChartSpec) -> Self {
        Self {
            title,
            subtitle: None,
            badge: None,
            callout: None,
            wide: false,
            content: PanelContent::Chart { chart },
        }
    }

    /// An insight-list panel
    pub fn insights(title: &'static str, groups: Vec<InsightGroup>) -> Self {
        Self {
            title,
            subtitle: None,
            badge: None,
            callout: None,
            wide: true,
            content: PanelContent::Insights { groups },
        }
    }

    /// Builder method: add a subtitle
    pub fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Builder method: add a badge next to the title
    pub fn badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Builder method: add a callout
    pub fn callout(mut self, tone: Tone, lead: &'static str, text: &'static str) -> Self {
        self.callout = Some(Callout { tone, lead, text });
        self
    }

    /// Builder method: span the full row
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// The chart spec, if this is a chart panel
    pub fn chart_spec(&self) -> Option<&ChartSpec> {
        match &self.content {
            PanelContent::Chart { chart } => Some(chart),
            PanelContent::Insights { .. } => None,
        }
    }
}

/// Everything a section shows
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Layout {
    pub section: Section,
    pub cards: Vec<StatCard>,
    pub panels: Vec<Panel>,
}

impl Layout {
    /// Datasets feeding this layout's charts, in panel order
    pub fn datasets(&self) -> Vec<DatasetName> {
        self.charts().map(|chart| chart.dataset).collect()
    }

    /// Chart specs in panel order
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.panels.iter().filter_map(Panel::chart_spec)
    }

    /// The `index`-th chart, counting chart panels only
    pub fn chart(&self, index: usize) -> Option<&ChartSpec> {
        self.charts().nth(index)
    }

    /// Card labels, in display order
    pub fn card_labels(&self) -> Vec<&'static str> {
        self.cards.iter().map(|card| card.label).collect()
    }

    /// Panel titles, in display order
    pub fn panel_titles(&self) -> Vec<&'static str> {
        self.panels.iter().map(|panel| panel.title).collect()
    }
}
