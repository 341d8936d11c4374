//! Terminal report
//!
//! Plain-text rendering of a section for the CLI.

use std::fmt::Write as _;

use crate::chart::{ChartRenderer, ChartResult, TextRenderer};
use crate::dashboard::{render_card_text, Layout, PanelContent, HEADER_CARDS};
use crate::dataset::DatasetRegistry;

/// Render a section as text, optionally preceded by the global header cards
pub fn render_text(
    layout: &Layout,
    registry: &DatasetRegistry,
    renderer: &TextRenderer,
    with_header: bool,
) -> ChartResult<String> {
    let mut out = String::new();

    if with_header {
        for card in HEADER_CARDS.iter() {
            let _ = writeln!(out, "{}", render_card_text(card));
        }
        out.push('\n');
    }

    let title = layout.section.label().to_uppercase();
    let _ = writeln!(out, "== {} ==", title);

    if !layout.cards.is_empty() {
        out.push('\n');
        for card in &layout.cards {
            let _ = writeln!(out, "{}", render_card_text(card));
        }
    }

    for panel in &layout.panels {
        out.push('\n');
        match panel.badge {
            Some(badge) => {
                let _ = writeln!(out, "-- {} [{}]", panel.title, badge);
            }
            None => {
                let _ = writeln!(out, "-- {}", panel.title);
            }
        }
        if let Some(subtitle) = panel.subtitle {
            let _ = writeln!(out, "   {}", subtitle);
        }
        if let Some(callout) = &panel.callout {
            let _ = writeln!(
                out,
                "   {} {} {}",
                callout.tone.marker(),
                callout.lead,
                callout.text
            );
        }

        match &panel.content {
            PanelContent::Chart { chart } => {
                let dataset = registry.dataset(chart.dataset);
                out.push_str(&renderer.render(chart, &dataset)?);
            }
            PanelContent::Insights { groups } => {
                for group in groups {
                    let _ = writeln!(out, "  {}", group.title);
                    for item in &group.items {
                        let _ = writeln!(out, "    {} {}", item.tone.marker(), item.text);
                    }
                }
            }
        }
    }

    Ok(out)
}
