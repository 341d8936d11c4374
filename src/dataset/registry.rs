//! Static Dataset Registry
//!
//! Every table the dashboard can show, compiled in as `static` data.
//! The registry is read-only: there is no insert, update or delete path.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::{
    CategoryCount, Dataset, DatasetName, RankedRegion, SystemSummary, WeekdayCount,
};

pub static AGE_DISTRIBUTION_ENROLLMENT: [CategoryCount; 3] = [
    CategoryCount { name: "0-5 years", value: 2_020_406, percentage: 61.21 },
    CategoryCount { name: "5-17 years", value: 1_157_841, percentage: 35.08 },
    CategoryCount { name: "18+ years", value: 122_779, percentage: 3.72 },
];

pub static AGE_DISTRIBUTION_BIOMETRIC: [CategoryCount; 2] = [
    CategoryCount { name: "Youth (5-17)", value: 34_226_855, percentage: 49.06 },
    CategoryCount { name: "Adults (17+)", value: 35_536_240, percentage: 50.94 },
];

pub static AGE_DISTRIBUTION_DEMOGRAPHIC: [CategoryCount; 2] = [
    CategoryCount { name: "Youth (5-17)", value: 4_863_424, percentage: 9.87 },
    CategoryCount { name: "Adults (17+)", value: 44_431_763, percentage: 90.13 },
];

pub static TOP_STATES_ENROLLMENT: [RankedRegion; 10] = [
    RankedRegion { region: "Uttar Pradesh", count: 670_426, percentage: Some(20.31) },
    RankedRegion { region: "Bihar", count: 390_901, percentage: Some(11.84) },
    RankedRegion { region: "Madhya Pradesh", count: 277_081, percentage: Some(8.39) },
    RankedRegion { region: "West Bengal", count: 222_260, percentage: Some(6.73) },
    RankedRegion { region: "Maharashtra", count: 222_030, percentage: Some(6.73) },
    RankedRegion { region: "Rajasthan", count: 205_699, percentage: Some(6.23) },
    RankedRegion { region: "Gujarat", count: 193_313, percentage: Some(5.86) },
    RankedRegion { region: "Assam", count: 167_163, percentage: Some(5.06) },
    RankedRegion { region: "Karnataka", count: 121_762, percentage: Some(3.69) },
    RankedRegion { region: "Tamil Nadu", count: 105_582, percentage: Some(3.20) },
];

pub static TOP_DISTRICTS_ENROLLMENT: [RankedRegion; 10] = [
    RankedRegion { region: "Sitamarhi, Bihar", count: 34_278, percentage: None },
    RankedRegion { region: "Bahraich, UP", count: 32_681, percentage: None },
    RankedRegion { region: "Thane, Maharashtra", count: 29_464, percentage: None },
    RankedRegion { region: "East Khasi Hills, Meghalaya", count: 25_873, percentage: None },
    RankedRegion { region: "Sitapur, UP", count: 23_140, percentage: None },
    RankedRegion { region: "Bengaluru Urban", count: 23_074, percentage: None },
    RankedRegion { region: "West Champaran, Bihar", count: 20_974, percentage: None },
    RankedRegion { region: "Agra, UP", count: 20_900, percentage: None },
    RankedRegion { region: "Bengaluru", count: 20_553, percentage: None },
    RankedRegion { region: "Muzaffarpur, Bihar", count: 20_458, percentage: None },
];

pub static WEEKDAY_ENROLLMENT: [WeekdayCount; 7] = [
    WeekdayCount { day: "Mon", count: 349_035, average: 3.99 },
    WeekdayCount { day: "Tue", count: 1_161_686, average: 16.93 },
    WeekdayCount { day: "Wed", count: 329_609, average: 4.37 },
    WeekdayCount { day: "Thu", count: 483_141, average: 6.63 },
    WeekdayCount { day: "Fri", count: 352_213, average: 4.33 },
    WeekdayCount { day: "Sat", count: 287_341, average: 3.73 },
    WeekdayCount { day: "Sun", count: 338_001, average: 9.05 },
];

pub static SYSTEM_COMPARISON: [SystemSummary; 3] = [
    SystemSummary {
        system: "Enrollment",
        records_thousands: 1006.029,
        updates: 5_400,
        duplicate_percentage: 2.3,
    },
    SystemSummary {
        system: "Biometric",
        records_thousands: 1861.108,
        updates: 69_800,
        duplicate_percentage: 5.1,
    },
    SystemSummary {
        system: "Demographic",
        records_thousands: 2071.700,
        updates: 49_300,
        duplicate_percentage: 22.9,
    },
];

/// Read-only lookup table from dataset name to its static rows
#[derive(Debug)]
pub struct DatasetRegistry {
    by_name: HashMap<&'static str, Dataset>,
}

static GLOBAL: OnceLock<DatasetRegistry> = OnceLock::new();

impl DatasetRegistry {
    /// The process-wide registry, built on first use
    pub fn global() -> &'static DatasetRegistry {
        GLOBAL.get_or_init(|| {
            let registry = Self::build();
            tracing::debug!(datasets = registry.by_name.len(), "Dataset registry initialized");
            registry
        })
    }

    fn build() -> Self {
        let by_name = DatasetName::all()
            .iter()
            .map(|name| (name.as_str(), Self::table(*name)))
            .collect();
        Self { by_name }
    }

    fn table(name: DatasetName) -> Dataset {
        match name {
            DatasetName::AgeDistributionEnrollment => {
                Dataset::Categories(&AGE_DISTRIBUTION_ENROLLMENT)
            }
            DatasetName::AgeDistributionBiometric => {
                Dataset::Categories(&AGE_DISTRIBUTION_BIOMETRIC)
            }
            DatasetName::AgeDistributionDemographic => {
                Dataset::Categories(&AGE_DISTRIBUTION_DEMOGRAPHIC)
            }
            DatasetName::TopStatesEnrollment => Dataset::Regions(&TOP_STATES_ENROLLMENT),
            DatasetName::TopDistrictsEnrollment => Dataset::Regions(&TOP_DISTRICTS_ENROLLMENT),
            DatasetName::WeekdayEnrollment => Dataset::Weekdays(&WEEKDAY_ENROLLMENT),
            DatasetName::SystemComparison => Dataset::Systems(&SYSTEM_COMPARISON),
        }
    }

    /// Look up a dataset by its exact name
    pub fn get(&self, name: &str) -> Option<Dataset> {
        self.by_name.get(name).copied()
    }

    /// Typed lookup; every `DatasetName` is registered
    pub fn dataset(&self, name: DatasetName) -> Dataset {
        self.by_name
            .get(name.as_str())
            .copied()
            .unwrap_or_else(|| Self::table(name))
    }

    /// Registered names in declaration order
    pub fn names(&self) -> impl Iterator<Item = DatasetName> {
        DatasetName::all().iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn percentage_sum(rows: &[CategoryCount]) -> f64 {
        rows.iter().map(|r| r.percentage).sum()
    }

    fn assert_sorted_descending(rows: &[RankedRegion]) {
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(
                pair[0].count >= pair[1].count,
                "{} ({}) ranked above {} ({})",
                pair[0].region,
                pair[0].count,
                pair[1].region,
                pair[1].count
            );
        }
    }

    #[test]
    fn test_age_groups_sum_to_hundred() {
        for rows in [
            &AGE_DISTRIBUTION_ENROLLMENT[..],
            &AGE_DISTRIBUTION_BIOMETRIC[..],
            &AGE_DISTRIBUTION_DEMOGRAPHIC[..],
        ] {
            let sum = percentage_sum(rows);
            assert!((sum - 100.0).abs() < 0.05, "sum was {}", sum);
        }
        // 61.21 + 35.08 + 3.72
        assert!((percentage_sum(&AGE_DISTRIBUTION_ENROLLMENT) - 100.01).abs() < 1e-9);
    }

    #[test]
    fn test_leaderboards_sorted_descending() {
        assert_sorted_descending(&TOP_STATES_ENROLLMENT);
        assert_sorted_descending(&TOP_DISTRICTS_ENROLLMENT);

        let first = TOP_STATES_ENROLLMENT.first().unwrap();
        let last = TOP_STATES_ENROLLMENT.last().unwrap();
        assert_eq!((first.region, first.count), ("Uttar Pradesh", 670_426));
        assert_eq!((last.region, last.count), ("Tamil Nadu", 105_582));
    }

    #[test]
    fn test_weekdays_complete_and_unique() {
        assert_eq!(WEEKDAY_ENROLLMENT.len(), 7);
        let days: HashSet<_> = WEEKDAY_ENROLLMENT.iter().map(|w| w.day).collect();
        assert_eq!(days.len(), 7);
        for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
            assert!(days.contains(day), "missing {}", day);
        }
    }

    #[test]
    fn test_one_summary_per_system() {
        let systems: Vec<_> = SYSTEM_COMPARISON.iter().map(|s| s.system).collect();
        assert_eq!(systems, vec!["Enrollment", "Biometric", "Demographic"]);
    }

    #[test]
    fn test_registry_lookup_by_exact_name() {
        let registry = DatasetRegistry::global();
        assert_eq!(registry.len(), DatasetName::all().len());

        let states = registry.get("top_states_enrollment").unwrap();
        assert_eq!(states, Dataset::Regions(&TOP_STATES_ENROLLMENT));
        assert_eq!(states.len(), 10);

        assert!(registry.get("topStatesEnrollment").is_none());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_registry_is_shared() {
        let a = DatasetRegistry::global() as *const DatasetRegistry;
        let b = DatasetRegistry::global() as *const DatasetRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_name_resolves() {
        let registry = DatasetRegistry::global();
        for name in registry.names() {
            assert_eq!(registry.get(name.as_str()), Some(registry.dataset(name)));
            assert!(!registry.dataset(name).is_empty());
        }
    }
}
