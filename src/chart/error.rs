//! Chart error types

use thiserror::Error;

use crate::dataset::DatasetName;

/// Errors raised while binding a chart mapping to its dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The mapping names a field the records do not have
    #[error("Dataset '{dataset}' has no field '{field}'")]
    UnknownField { dataset: DatasetName, field: String },

    /// The field exists but holds the wrong kind of value
    #[error("Field '{field}' of dataset '{dataset}' is not a {expected}")]
    FieldType {
        dataset: DatasetName,
        field: String,
        expected: &'static str,
    },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
