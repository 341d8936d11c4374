//! Dashboard sections
//!
//! The closed set of mutually exclusive views the dashboard can show.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the five dashboard views
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Enrollment,
    Biometric,
    Demographic,
    Comparison,
}

/// Returned when parsing an identifier outside the section set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section '{0}' (expected one of: overview, enrollment, biometric, demographic, comparison)")]
pub struct UnknownSection(pub String);

impl Section {
    /// All sections in tab order
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Enrollment,
            Section::Biometric,
            Section::Demographic,
            Section::Comparison,
        ]
    }

    /// Identifier used in URLs, config and the JSON API
    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Enrollment => "enrollment",
            Section::Biometric => "biometric",
            Section::Demographic => "demographic",
            Section::Comparison => "comparison",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Enrollment => "Enrollment",
            Section::Biometric => "Biometric",
            Section::Demographic => "Demographic",
            Section::Comparison => "System Comparison",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_section() {
        for section in Section::all() {
            assert_eq!(section.id().parse::<Section>(), Ok(*section));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "settings".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSection("settings".to_string()));
        assert!("Overview".parse::<Section>().is_err());
    }

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Section::default(), Section::Overview);
    }

    #[test]
    fn test_serde_uses_ids() {
        assert_eq!(serde_json::to_string(&Section::Comparison).unwrap(), "\"comparison\"");
        let parsed: Section = serde_json::from_str("\"biometric\"").unwrap();
        assert_eq!(parsed, Section::Biometric);
    }
}
