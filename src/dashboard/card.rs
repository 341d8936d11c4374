//! Summary Card
//!
//! A small metric display: label, value, accent color and optional subtitle.

use serde::Serialize;

use crate::render::escape_html;

/// Accent color of a card
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Emerald,
    Purple,
    Orange,
    Red,
    Indigo,
    Slate,
}

impl Accent {
    /// Hex color used for the card border and value
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Emerald => "#10b981",
            Accent::Purple => "#a855f7",
            Accent::Orange => "#f97316",
            Accent::Red => "#ef4444",
            Accent::Indigo => "#4f46e5",
            Accent::Slate => "#1e293b",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Emerald => "emerald",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Red => "red",
            Accent::Indigo => "indigo",
            Accent::Slate => "slate",
        }
    }
}

/// A single summary metric
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
}

impl StatCard {
    pub const fn new(label: &'static str, value: &'static str, accent: Accent) -> Self {
        Self {
            label,
            value,
            accent,
            subtitle: None,
        }
    }

    /// Builder method: add a subtitle line
    pub const fn subtitle(self, subtitle: &'static str) -> Self {
        Self {
            subtitle: Some(subtitle),
            ..self
        }
    }
}

/// Render a card as an HTML fragment
pub fn render_card_html(card: &StatCard) -> String {
    let subtitle = card
        .subtitle
        .map(|s| format!(r#"<p class="card-subtitle">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="stat-card accent-{accent}" style="border-left-color: {color}">
    <p class="card-label">{label}</p>
    <h3 class="card-value">{value}</h3>
    {subtitle}
</div>"#,
        accent = card.accent.name(),
        color = card.accent.hex(),
        label = escape_html(card.label),
        value = escape_html(card.value),
        subtitle = subtitle,
    )
}

/// Render a card as one or two lines of text
pub fn render_card_text(card: &StatCard) -> String {
    match card.subtitle {
        Some(subtitle) => format!(
            "{:<20} {:>10}\n{:<20} {:>10}",
            card.label.to_uppercase(),
            card.value,
            "",
            subtitle
        ),
        None => format!("{:<20} {:>10}", card.label.to_uppercase(), card.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_html() {
        let card = StatCard::new("Total Records", "4.94M", Accent::Blue)
            .subtitle("+12% from last quarter");
        let html = render_card_html(&card);
        assert!(html.contains("Total Records"));
        assert!(html.contains("4.94M"));
        assert!(html.contains("accent-blue"));
        assert!(html.contains("+12% from last quarter"));
    }

    #[test]
    fn test_card_html_without_subtitle() {
        let html = render_card_html(&StatCard::new("Duplicate Rate", "5.1%", Accent::Orange));
        assert!(!html.contains("card-subtitle"));
    }

    #[test]
    fn test_card_html_escapes() {
        let html = render_card_html(&StatCard::new("<b>", "a&b", Accent::Red));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a&amp;b"));
    }

    #[test]
    fn test_card_text() {
        let text = render_card_text(&StatCard::new("Districts", "985+", Accent::Orange));
        assert!(text.starts_with("DISTRICTS"));
        assert!(text.ends_with("985+"));
        assert_eq!(text.lines().count(), 1);

        let card =
            StatCard::new("Districts", "985+", Accent::Orange).subtitle("Active enrollment centers");
        let text = render_card_text(&card);
        assert_eq!(text.lines().count(), 2);
    }
}
