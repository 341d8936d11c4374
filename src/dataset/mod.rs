//! Static Datasets
//!
//! Precomputed statistics shown by the dashboard:
//!
//! - **types**: Record types (CategoryCount, RankedRegion, WeekdayCount, SystemSummary)
//! - **registry**: The compiled-in tables and the read-only name lookup
//!
//! # Example
//!
//! ```rust
//! use aadhaar_insights::dataset::{Dataset, DatasetRegistry};
//!
//! let registry = DatasetRegistry::global();
//! if let Some(Dataset::Regions(states)) = registry.get("top_states_enrollment") {
//!     assert_eq!(states[0].region, "Uttar Pradesh");
//! }
//! ```

pub mod registry;
pub mod types;

pub use registry::DatasetRegistry;
pub use types::{
    CategoryCount, Dataset, DatasetName, FieldValue, RankedRegion, Record, SystemSummary,
    WeekdayCount,
};
