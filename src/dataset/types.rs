//! Record types for the static dashboard datasets
//!
//! This module defines the rows every dataset is built from:
//! - `CategoryCount`: A named bucket with a count and its share of the group
//! - `RankedRegion`: A state or district paired with a count
//! - `WeekdayCount`: Traffic for one day of the week
//! - `SystemSummary`: Headline figures for one subsystem
//!
//! Records are plain `Copy` values with `&'static str` labels so whole tables
//! can live in `static` items.

use serde::Serialize;

/// A single field value as seen by the chart layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(&'static str),
    Number(f64),
}

impl FieldValue {
    /// Numeric view of the value, `None` for text
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Text view of the value, `None` for numbers
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Field access by name, used to bind record fields to chart channels
pub trait Record {
    /// Look up a field by its name
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Names of every field this record exposes
    fn field_names(&self) -> &'static [&'static str];
}

/// A named bucket with an absolute count and its percentage share
///
/// Used for age-distribution breakdowns. Percentages of one group sum to
/// roughly 100; they are baked in, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub value: u64,
    pub percentage: f64,
}

impl Record for CategoryCount {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Text(self.name)),
            "value" => Some(FieldValue::Number(self.value as f64)),
            "percentage" => Some(FieldValue::Number(self.percentage)),
            _ => None,
        }
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["name", "value", "percentage"]
    }
}

/// A geographic unit (state or district) paired with a count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedRegion {
    pub region: &'static str,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl Record for RankedRegion {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "region" => Some(FieldValue::Text(self.region)),
            "count" => Some(FieldValue::Number(self.count as f64)),
            "percentage" => self.percentage.map(FieldValue::Number),
            _ => None,
        }
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["region", "count", "percentage"]
    }
}

/// Enrollment traffic for one weekday
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayCount {
    /// Three-letter label, one of Mon..Sun
    pub day: &'static str,
    pub count: u64,
    pub average: f64,
}

impl Record for WeekdayCount {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "day" => Some(FieldValue::Text(self.day)),
            "count" => Some(FieldValue::Number(self.count as f64)),
            "average" => Some(FieldValue::Number(self.average)),
            _ => None,
        }
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["day", "count", "average"]
    }
}

/// Headline figures for one subsystem (enrollment, biometric, demographic)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemSummary {
    pub system: &'static str,
    pub records_thousands: f64,
    pub updates: u64,
    pub duplicate_percentage: f64,
}

impl Record for SystemSummary {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "system" => Some(FieldValue::Text(self.system)),
            "records_thousands" => Some(FieldValue::Number(self.records_thousands)),
            "updates" => Some(FieldValue::Number(self.updates as f64)),
            "duplicate_percentage" => Some(FieldValue::Number(self.duplicate_percentage)),
            _ => None,
        }
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["system", "records_thousands", "updates", "duplicate_percentage"]
    }
}

/// Names of every dataset in the registry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetName {
    AgeDistributionEnrollment,
    AgeDistributionBiometric,
    AgeDistributionDemographic,
    TopStatesEnrollment,
    TopDistrictsEnrollment,
    WeekdayEnrollment,
    SystemComparison,
}

impl DatasetName {
    /// Get all dataset names for iteration
    pub fn all() -> &'static [DatasetName] {
        &[
            DatasetName::AgeDistributionEnrollment,
            DatasetName::AgeDistributionBiometric,
            DatasetName::AgeDistributionDemographic,
            DatasetName::TopStatesEnrollment,
            DatasetName::TopDistrictsEnrollment,
            DatasetName::WeekdayEnrollment,
            DatasetName::SystemComparison,
        ]
    }

    /// The exact registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetName::AgeDistributionEnrollment => "age_distribution_enrollment",
            DatasetName::AgeDistributionBiometric => "age_distribution_biometric",
            DatasetName::AgeDistributionDemographic => "age_distribution_demographic",
            DatasetName::TopStatesEnrollment => "top_states_enrollment",
            DatasetName::TopDistrictsEnrollment => "top_districts_enrollment",
            DatasetName::WeekdayEnrollment => "weekday_enrollment",
            DatasetName::SystemComparison => "system_comparison",
        }
    }

    /// Exact-match lookup; no case folding or aliasing
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.as_str() == name)
    }
}

impl std::fmt::Display for DatasetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A borrowed view of one static table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Dataset {
    Categories(&'static [CategoryCount]),
    Regions(&'static [RankedRegion]),
    Weekdays(&'static [WeekdayCount]),
    Systems(&'static [SystemSummary]),
}

impl Dataset {
    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            Dataset::Categories(rows) => rows.len(),
            Dataset::Regions(rows) => rows.len(),
            Dataset::Weekdays(rows) => rows.len(),
            Dataset::Systems(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as field-addressable records, in table order
    pub fn records(&self) -> Vec<&'static dyn Record> {
        match *self {
            Dataset::Categories(rows) => rows.iter().map(|r| r as &dyn Record).collect(),
            Dataset::Regions(rows) => rows.iter().map(|r| r as &dyn Record).collect(),
            Dataset::Weekdays(rows) => rows.iter().map(|r| r as &dyn Record).collect(),
            Dataset::Systems(rows) => rows.iter().map(|r| r as &dyn Record).collect(),
        }
    }

    /// Short name of the record type held by this table
    pub fn record_kind(&self) -> &'static str {
        match self {
            Dataset::Categories(_) => "category_count",
            Dataset::Regions(_) => "ranked_region",
            Dataset::Weekdays(_) => "weekday_count",
            Dataset::Systems(_) => "system_summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_name_round_trip() {
        for name in DatasetName::all() {
            assert_eq!(DatasetName::from_name(name.as_str()), Some(*name));
        }
    }

    #[test]
    fn test_dataset_name_is_exact() {
        assert_eq!(DatasetName::from_name("Top_States_Enrollment"), None);
        assert_eq!(DatasetName::from_name(" weekday_enrollment"), None);
        assert_eq!(DatasetName::from_name(""), None);
    }

    #[test]
    fn test_record_fields() {
        let row = CategoryCount {
            name: "0-5 years",
            value: 10,
            percentage: 50.0,
        };
        assert_eq!(row.field("name"), Some(FieldValue::Text("0-5 years")));
        assert_eq!(row.field("value").and_then(|v| v.as_number()), Some(10.0));
        assert_eq!(row.field("missing"), None);

        let region = RankedRegion {
            region: "Agra, UP",
            count: 20900,
            percentage: None,
        };
        // Absent optional fields are not bound
        assert_eq!(region.field("percentage"), None);
        assert_eq!(region.field("region").and_then(|v| v.as_text()), Some("Agra, UP"));
    }

    #[test]
    fn test_dataset_serializes_with_kind() {
        static ROWS: [WeekdayCount; 1] = [WeekdayCount {
            day: "Mon",
            count: 1,
            average: 1.5,
        }];
        let json = serde_json::to_value(Dataset::Weekdays(&ROWS)).unwrap();
        assert_eq!(json["kind"], "weekdays");
        assert_eq!(json["rows"][0]["day"], "Mon");
    }
}
