//! Section Router
//!
//! Maps a section to its layout. Each branch is a fixed composition of cards
//! and panels over the static datasets; nothing here is computed.

use crate::chart::{ChartKind, ChartSpec, ColorChannel, FieldMapping, LabelFormat};
use crate::dataset::DatasetName;

use super::card::{Accent, StatCard};
use super::layout::{Insight, InsightGroup, Layout, Panel, Tone};
use super::section::Section;

/// Cards shown in the page header on every section
pub const HEADER_CARDS: [StatCard; 4] = [
    StatCard::new("Total Records", "4.94M", Accent::Blue).subtitle("+12% from last quarter"),
    StatCard::new("Transactions", "124.5M", Accent::Emerald).subtitle("Across all platforms"),
    StatCard::new("States Covered", "65+", Accent::Purple).subtitle("Including UTs"),
    StatCard::new("Districts", "985+", Accent::Orange).subtitle("Active enrollment centers"),
];

const INDIGO: &str = "#6366f1";
const VIOLET: &str = "#8b5cf6";
const RED: &str = "#ef4444";

/// Layout for a section
pub fn route(section: Section) -> Layout {
    let (cards, panels) = match section {
        Section::Overview => overview(),
        Section::Enrollment => enrollment(),
        Section::Biometric => biometric(),
        Section::Demographic => demographic(),
        Section::Comparison => comparison(),
    };

    Layout {
        section,
        cards,
        panels,
    }
}

/// Layout for a raw identifier; `None` when it names no section
pub fn route_id(id: &str) -> Option<Layout> {
    id.parse::<Section>().ok().map(route)
}

fn overview() -> (Vec<StatCard>, Vec<Panel>) {
    let panels = vec![
        Panel::chart(
            "Age Distribution: Enrollment",
            ChartSpec::new(
                ChartKind::Pie,
                DatasetName::AgeDistributionEnrollment,
                FieldMapping::new("name", "value"),
            ),
        ),
        Panel::chart(
            "Top 10 States by Enrollment",
            ChartSpec::new(
                ChartKind::BarHorizontal,
                DatasetName::TopStatesEnrollment,
                FieldMapping::new("region", "count")
                    .color(ColorChannel::Fixed(INDIGO))
                    .series("Enrollments"),
            ),
        ),
        Panel::chart(
            "Enrollment by Day of Week",
            ChartSpec::new(
                ChartKind::Area,
                DatasetName::WeekdayEnrollment,
                FieldMapping::new("day", "count")
                    .color(ColorChannel::Fixed(INDIGO))
                    .series("Enrollments"),
            ),
        )
        .subtitle("Weekly traffic patterns and anomalies")
        .callout(
            Tone::Warning,
            "Anomaly:",
            "Tuesday shows 35.2% of all enrollments",
        )
        .wide(),
    ];

    (Vec::new(), panels)
}

fn enrollment() -> (Vec<StatCard>, Vec<Panel>) {
    let cards = vec![
        StatCard::new("Total Enrollments", "3.3M", Accent::Indigo).subtitle("Steady growth in Q4"),
        StatCard::new("Coverage Period", "239 Days", Accent::Slate)
            .subtitle("Active monitoring active"),
        StatCard::new("Data Quality", "98.8%", Accent::Emerald).subtitle("Validation score"),
    ];

    let panels = vec![
        Panel::chart(
            "Top 10 Districts",
            ChartSpec::new(
                ChartKind::BarHorizontal,
                DatasetName::TopDistrictsEnrollment,
                FieldMapping::new("region", "count")
                    .color(ColorChannel::Fixed(VIOLET))
                    .series("Enrollments"),
            ),
        ),
        Panel::chart(
            "Age Group Distribution",
            ChartSpec::new(
                ChartKind::Pie,
                DatasetName::AgeDistributionEnrollment,
                FieldMapping::new("name", "value"),
            ),
        )
        .badge("CRITICAL")
        .callout(
            Tone::Critical,
            "Critical Finding:",
            "Only 3.72% adult enrollments - requires immediate policy intervention.",
        ),
    ];

    (cards, panels)
}

fn biometric() -> (Vec<StatCard>, Vec<Panel>) {
    let cards = vec![
        StatCard::new("Total Updates", "69.8M", Accent::Blue),
        StatCard::new("Total Records", "1.86M", Accent::Emerald),
        StatCard::new("Duplicate Rate", "5.1%", Accent::Orange),
    ];

    let panels = vec![Panel::chart(
        "Age Distribution: Biometric Updates",
        ChartSpec::new(
            ChartKind::Pie,
            DatasetName::AgeDistributionBiometric,
            FieldMapping::new("name", "value")
                .color(ColorChannel::Palette { offset: 3 })
                .label(LabelFormat::NameAndPercentage),
        ),
    )
    .callout(
        Tone::Success,
        "Success Story:",
        "Nearly perfect balance - 49.1% Youth vs 50.9% Adults.",
    )
    .wide()];

    (cards, panels)
}

fn demographic() -> (Vec<StatCard>, Vec<Panel>) {
    let cards = vec![
        StatCard::new("Total Updates", "49.3M", Accent::Purple),
        StatCard::new("Total Records", "2.07M", Accent::Blue),
        StatCard::new("Duplicate Rate", "22.9%", Accent::Red),
    ];

    let panels = vec![Panel::chart(
        "Age Distribution: Demographic Updates",
        ChartSpec::new(
            ChartKind::Pie,
            DatasetName::AgeDistributionDemographic,
            FieldMapping::new("name", "value")
                .color(ColorChannel::Palette { offset: 5 })
                .label(LabelFormat::NameAndPercentage),
        ),
    )
    .callout(
        Tone::Critical,
        "Critical Issue:",
        "22.9% duplicate rate - highest across all systems.",
    )
    .wide()];

    (cards, panels)
}

fn comparison() -> (Vec<StatCard>, Vec<Panel>) {
    let panels = vec![
        Panel::chart(
            "System Comparison: Records",
            ChartSpec::new(
                ChartKind::BarVertical,
                DatasetName::SystemComparison,
                FieldMapping::new("system", "records_thousands")
                    .color(ColorChannel::Fixed(INDIGO))
                    .series("Records (K)"),
            ),
        ),
        Panel::chart(
            "Data Quality: Duplicate Rate (%)",
            ChartSpec::new(
                ChartKind::BarVertical,
                DatasetName::SystemComparison,
                FieldMapping::new("system", "duplicate_percentage")
                    .color(ColorChannel::Fixed(RED))
                    .series("Duplicate %"),
            ),
        ),
        Panel::insights("Key Insights Across Systems", key_insights()),
    ];

    (Vec::new(), panels)
}

fn key_insights() -> Vec<InsightGroup> {
    let item = |tone, text| Insight { tone, text };

    vec![
        InsightGroup {
            title: "Enrollment",
            accent: Accent::Blue,
            items: vec![
                item(Tone::Success, "Child-focused (65.3% ages 0-5)"),
                item(Tone::Warning, "Only 3.1% adult enrollment"),
                item(Tone::Success, "98.8% data quality score"),
            ],
        },
        InsightGroup {
            title: "Biometric",
            accent: Accent::Emerald,
            items: vec![
                item(Tone::Success, "Perfect balance (49-51%)"),
                item(Tone::Success, "69.8M updates processed"),
                item(Tone::Success, "Low 5.1% duplicate rate"),
            ],
        },
        InsightGroup {
            title: "Demographic",
            accent: Accent::Purple,
            items: vec![
                item(Tone::Success, "Adult-dominated (90.1%)"),
                item(Tone::Critical, "22.9% duplicate rate"),
                item(Tone::Warning, "March 1st spike (22.6%)"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartRenderer, SvgRenderer};
    use crate::dataset::DatasetRegistry;
    use DatasetName::*;

    #[test]
    fn test_overview_layout() {
        let layout = route(Section::Overview);
        assert!(layout.cards.is_empty());
        assert_eq!(
            layout.datasets(),
            vec![AgeDistributionEnrollment, TopStatesEnrollment, WeekdayEnrollment]
        );
        let kinds: Vec<_> = layout.charts().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChartKind::Pie, ChartKind::BarHorizontal, ChartKind::Area]);
    }

    #[test]
    fn test_enrollment_layout() {
        let layout = route(Section::Enrollment);
        assert_eq!(
            layout.card_labels(),
            vec!["Total Enrollments", "Coverage Period", "Data Quality"]
        );
        assert_eq!(
            layout.datasets(),
            vec![TopDistrictsEnrollment, AgeDistributionEnrollment]
        );
        assert_eq!(layout.panels[1].badge, Some("CRITICAL"));
    }

    #[test]
    fn test_enrollment_card_subtitles() {
        let subtitles: Vec<_> = route(Section::Enrollment)
            .cards
            .iter()
            .map(|card| card.subtitle)
            .collect();
        assert_eq!(
            subtitles,
            vec![
                Some("Steady growth in Q4"),
                Some("Active monitoring active"),
                Some("Validation score"),
            ]
        );
    }

    #[test]
    fn test_biometric_layout() {
        let layout = route(Section::Biometric);
        assert_eq!(
            layout.card_labels(),
            vec!["Total Updates", "Total Records", "Duplicate Rate"]
        );
        assert_eq!(layout.cards[2].value, "5.1%");
        assert_eq!(layout.datasets(), vec![AgeDistributionBiometric]);
        let callout = layout.panels[0].callout.as_ref().unwrap();
        assert_eq!(callout.tone, Tone::Success);
    }

    #[test]
    fn test_demographic_layout() {
        let layout = route(Section::Demographic);
        assert_eq!(layout.cards[2].value, "22.9%");
        assert_eq!(layout.cards[2].accent, Accent::Red);
        assert_eq!(layout.datasets(), vec![AgeDistributionDemographic]);
    }

    #[test]
    fn test_comparison_layout() {
        let layout = route(Section::Comparison);
        assert!(layout.cards.is_empty());
        assert_eq!(layout.datasets(), vec![SystemComparison, SystemComparison]);
        assert_eq!(layout.panels.len(), 3);
        match &layout.panels[2].content {
            crate::dashboard::PanelContent::Insights { groups } => {
                let titles: Vec<_> = groups.iter().map(|g| g.title).collect();
                assert_eq!(titles, vec!["Enrollment", "Biometric", "Demographic"]);
                assert!(groups.iter().all(|g| g.items.len() == 3));
            }
            other => panic!("expected insights, got {:?}", other),
        }
    }

    #[test]
    fn test_route_is_pure() {
        for section in Section::all() {
            assert_eq!(route(*section), route(*section));
            assert_eq!(route(*section).section, *section);
        }
    }

    #[test]
    fn test_route_id() {
        assert_eq!(route_id("biometric"), Some(route(Section::Biometric)));
        assert_eq!(route_id("reports"), None);
        assert_eq!(route_id(""), None);
    }

    #[test]
    fn test_every_chart_binds_to_its_dataset() {
        let registry = DatasetRegistry::global();
        let renderer = SvgRenderer::default();
        for section in Section::all() {
            for chart in route(*section).charts() {
                let dataset = registry.dataset(chart.dataset);
                assert!(
                    renderer.render(chart, &dataset).is_ok(),
                    "{} chart over {} failed to bind",
                    section,
                    chart.dataset
                );
            }
        }
    }

    #[test]
    fn test_header_cards() {
        let labels: Vec<_> = HEADER_CARDS.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["Total Records", "Transactions", "States Covered", "Districts"]
        );
    }
}
