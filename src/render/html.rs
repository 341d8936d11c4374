//! HTML page generation
//!
//! Generates the full dashboard page: header with global cards and status,
//! section tabs, the active section body and a footer. Charts are inlined as
//! SVG, so the page works without scripts or network access.

use crate::chart::{ChartRenderer, ChartResult, SvgRenderer};
use crate::config::DashboardConfig;
use crate::dashboard::{
    render_card_html, Callout, InsightGroup, Layout, Panel, PanelContent, Section, HEADER_CARDS,
};
use crate::dataset::DatasetRegistry;

use super::escape_html;

/// Inputs for one page render
#[derive(Debug, Clone, Copy)]
pub struct PageOptions<'a> {
    pub config: &'a DashboardConfig,
    /// Tab to highlight
    pub active: Section,
    /// Section body; `None` renders the page with an empty body
    pub layout: Option<&'a Layout>,
}

/// Render the dashboard page
pub fn render_page(options: &PageOptions<'_>, registry: &DatasetRegistry) -> ChartResult<String> {
    let renderer = SvgRenderer::new(options.config.chart_width, options.config.chart_height);

    let body = match options.layout {
        Some(layout) => render_section(layout, registry, &renderer)?,
        None => String::new(),
    };

    let section_id = options
        .layout
        .map(|layout| layout.section.id())
        .unwrap_or("none");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {nav}
        <main class="section" data-section="{section_id}">
{body}
        </main>
        {footer}
    </div>
</body>
</html>"#,
        title = escape_html(&options.config.title),
        css = inline_css(),
        header = render_header(options.config),
        nav = render_nav(options.active),
        section_id = section_id,
        body = body,
        footer = render_footer(),
    ))
}

/// Render header: brand, title, period, status and global cards
fn render_header(config: &DashboardConfig) -> String {
    let cards: String = HEADER_CARDS.iter().map(render_card_html).collect();

    format!(
        r#"<header>
    <div class="header-row">
        <div>
            <span class="brand">UIDAI ANALYTICS</span>
            <h1>{title}</h1>
            <p class="period">{period}</p>
        </div>
        <div class="status">
            <p class="status-label">System Status</p>
            <p class="status-value">Operational</p>
        </div>
    </div>
    <div class="card-grid cols-4">{cards}</div>
</header>"#,
        title = escape_html(&config.title),
        period = escape_html(&config.period),
        cards = cards,
    )
}

/// Render section tabs; each tab links back to the page with a selection
fn render_nav(active: Section) -> String {
    let tabs: String = Section::all()
        .iter()
        .map(|section| {
            let class = if *section == active { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="/?section={id}">{label}</a>"#,
                class = class,
                id = section.id(),
                label = escape_html(section.label()),
            )
        })
        .collect();

    format!(r#"<nav class="tabs">{}</nav>"#, tabs)
}

/// Render the body of one section
fn render_section(
    layout: &Layout,
    registry: &DatasetRegistry,
    renderer: &SvgRenderer,
) -> ChartResult<String> {
    let mut html = String::new();

    if !layout.cards.is_empty() {
        let cards: String = layout.cards.iter().map(render_card_html).collect();
        html.push_str(&format!(
            r#"<div class="card-grid cols-{}">{}</div>"#,
            layout.cards.len(),
            cards
        ));
    }

    let panels = layout
        .panels
        .iter()
        .map(|panel| render_panel(panel, registry, renderer))
        .collect::<ChartResult<Vec<_>>>()?;

    html.push_str(&format!(r#"<div class="panel-grid">{}</div>"#, panels.join("\n")));
    Ok(html)
}

fn render_panel(
    panel: &Panel,
    registry: &DatasetRegistry,
    renderer: &SvgRenderer,
) -> ChartResult<String> {
    let subtitle = panel
        .subtitle
        .map(|s| format!(r#"<p class="panel-subtitle">{}</p>"#, escape_html(s)))
        .unwrap_or_default();
    let badge = panel
        .badge
        .map(|b| format!(r#"<span class="badge">{}</span>"#, escape_html(b)))
        .unwrap_or_default();
    let callout = panel.callout.as_ref().map(render_callout).unwrap_or_default();

    let content = match &panel.content {
        PanelContent::Chart { chart } => {
            let dataset = registry.dataset(chart.dataset);
            format!(
                r#"<div class="chart-frame">{}</div>"#,
                renderer.render(chart, &dataset)?
            )
        }
        PanelContent::Insights { groups } => render_insights(groups),
    };

    Ok(format!(
        r#"<section class="panel{wide}">
    <div class="panel-head">
        <div><h2>{title}</h2>{subtitle}</div>
        {badge}
    </div>
    {callout}
    {content}
</section>"#,
        wide = if panel.wide { " wide" } else { "" },
        title = escape_html(panel.title),
        subtitle = subtitle,
        badge = badge,
        callout = callout,
        content = content,
    ))
}

fn render_callout(callout: &Callout) -> String {
    format!(
        r#"<div class="callout tone-{tone}"><strong>{lead}</strong> {text}</div>"#,
        tone = callout.tone.name(),
        lead = escape_html(callout.lead),
        text = escape_html(callout.text),
    )
}

fn render_insights(groups: &[InsightGroup]) -> String {
    let columns: String = groups
        .iter()
        .map(|group| {
            let items: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<li class="tone-{}">{}</li>"#,
                        item.tone.name(),
                        escape_html(item.text)
                    )
                })
                .collect();
            format!(
                r#"<div class="insight-group" style="border-color: {color}">
    <h3 style="color: {color}">{title}</h3>
    <ul>{items}</ul>
</div>"#,
                color = group.accent.hex(),
                title = escape_html(group.title),
                items = items,
            )
        })
        .collect();

    format!(r#"<div class="insight-grid">{}</div>"#, columns)
}

fn render_footer() -> String {
    r#"<footer>
    <p>&copy; 2025 UIDAI Data Analysis Dashboard. Built for UIDAI Hackathon.</p>
</footer>"#
        .to_string()
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; }
body { margin: 0; background: #f8fafc; color: #0f172a; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
.container { max-width: 1280px; margin: 0 auto; padding: 32px 24px; }
.header-row { display: flex; justify-content: space-between; align-items: center; gap: 24px; flex-wrap: wrap; }
.brand { color: #4f46e5; font-weight: 700; letter-spacing: -0.01em; }
h1 { font-size: 2.5rem; font-weight: 800; margin: 8px 0; }
.period { color: #64748b; margin: 0; }
.status { background: #fff; border: 1px solid #f1f5f9; border-radius: 16px; padding: 8px 16px; text-align: right; }
.status-label { font-size: 0.75rem; color: #94a3b8; text-transform: uppercase; margin: 0; }
.status-value { font-size: 0.875rem; font-weight: 700; color: #10b981; margin: 0; }
.card-grid { display: grid; gap: 16px; margin: 32px 0; }
.cols-1 { grid-template-columns: 1fr; }
.cols-2 { grid-template-columns: repeat(2, 1fr); }
.cols-3 { grid-template-columns: repeat(3, 1fr); }
.cols-4 { grid-template-columns: repeat(4, 1fr); }
.stat-card { background: #fff; border-radius: 16px; border-left: 4px solid; padding: 24px; box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06); }
.card-label { font-size: 0.875rem; color: #64748b; text-transform: uppercase; letter-spacing: 0.05em; margin: 0; }
.card-value { font-size: 1.875rem; font-weight: 700; margin: 4px 0 0; }
.card-subtitle { font-size: 0.75rem; color: #94a3b8; margin: 4px 0 0; }
.tabs { display: flex; gap: 12px; margin-bottom: 32px; overflow-x: auto; }
.tab { padding: 12px 24px; border-radius: 12px; font-weight: 600; background: #fff; color: #475569; text-decoration: none; }
.tab:hover { color: #4f46e5; background: #f8fafc; }
.tab.active { background: #4f46e5; color: #fff; }
.panel-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px; }
.panel { background: rgba(255, 255, 255, 0.85); border-radius: 24px; padding: 32px; box-shadow: 0 20px 25px -5px rgba(226, 232, 240, 0.5); }
.panel.wide { grid-column: span 2; }
.panel-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; }
.panel h2 { font-size: 1.25rem; font-weight: 700; color: #1e293b; margin: 0; }
.panel-subtitle { color: #94a3b8; font-size: 0.875rem; margin: 4px 0 0; }
.badge { padding: 4px 12px; background: #fef2f2; color: #dc2626; font-size: 0.75rem; font-weight: 700; border-radius: 999px; }
.callout { border-radius: 16px; padding: 16px; margin-bottom: 24px; font-size: 0.875rem; }
.tone-info { background: #eff6ff; color: #1e40af; }
.tone-success { background: #ecfdf5; color: #065f46; }
.tone-warning { background: #fffbeb; color: #b45309; }
.tone-critical { background: #fef2f2; color: #991b1b; }
.chart-frame svg { width: 100%; height: auto; }
.insight-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.insight-group { border: 1px solid; border-radius: 16px; padding: 24px; }
.insight-group h3 { margin: 0 0 16px; }
.insight-group ul { margin: 0; padding-left: 18px; color: #475569; font-size: 0.875rem; }
.insight-group li { background: none; margin-bottom: 12px; }
footer { margin-top: 80px; padding: 32px 0; border-top: 1px solid #f1f5f9; text-align: center; color: #94a3b8; font-size: 0.875rem; }
@media (max-width: 900px) {
    .cols-3, .cols-4, .panel-grid, .insight-grid { grid-template-columns: 1fr; }
    .panel.wide { grid-column: auto; }
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{route, ViewState};

    fn page_for(layout: Option<&Layout>, active: Section) -> String {
        let config = DashboardConfig::default();
        let options = PageOptions {
            config: &config,
            active,
            layout,
        };
        render_page(&options, DatasetRegistry::global()).unwrap()
    }

    #[test]
    fn test_overview_page() {
        let layout = route(Section::Overview);
        let html = page_for(Some(&layout), Section::Overview);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"data-section="overview""#));
        assert!(html.contains("Age Distribution: Enrollment"));
        assert!(html.contains("Top 10 States by Enrollment"));
        assert!(html.contains("Enrollment by Day of Week"));
        assert!(html.contains("Tuesday shows 35.2% of all enrollments"));
        assert!(html.contains(r#"<a class="tab active" href="/?section=overview">Overview</a>"#));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_header_on_every_section() {
        for section in Section::all() {
            let layout = route(*section);
            let html = page_for(Some(&layout), *section);
            assert!(html.contains("Transactions"));
            assert!(html.contains("124.5M"));
            assert!(html.contains("Operational"));
        }
    }

    #[test]
    fn test_comparison_page_has_no_overview_content() {
        let mut state = ViewState::new();
        state.select_section(Section::Biometric);
        state.select_section(Section::Comparison);
        let layout = state.layout();
        let html = page_for(Some(&layout), state.active());

        assert!(html.contains("System Comparison: Records"));
        assert!(html.contains("Key Insights Across Systems"));
        assert!(html.contains("March 1st spike (22.6%)"));
        assert!(!html.contains("Top 10 States by Enrollment"));
        assert!(!html.contains("Age Distribution: Biometric Updates"));
    }

    #[test]
    fn test_empty_body() {
        let html = page_for(None, Section::Overview);
        assert!(html.contains(r#"data-section="none""#));
        assert!(!html.contains("<svg"));
        assert!(html.contains("Total Records"));
    }

    #[test]
    fn test_page_is_deterministic() {
        let layout = route(Section::Demographic);
        assert_eq!(
            page_for(Some(&layout), Section::Demographic),
            page_for(Some(&layout), Section::Demographic)
        );
    }
}
