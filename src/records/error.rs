use polars::datatypes::DataType;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// A source row that failed validation. The row is rejected, never coerced.
///
/// `row` is the zero-based position of the row in the source table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedRecordError {
    #[error("Row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("Row {row}: value {value} in column '{column}' is negative")]
    NegativeValue {
        row: usize,
        column: &'static str,
        value: i64,
    },

    #[error("Row {row}: value '{value}' in column '{column}' is not an integer")]
    NotAnInteger {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: value {value} in column '{column}' is out of range")]
    ValueOutOfRange {
        row: usize,
        column: &'static str,
        value: i64,
    },

    #[error("Row {row}: unknown season code {code}")]
    UnknownSeason { row: usize, code: i64 },

    #[error("Row {row}: unknown weather code {code}")]
    UnknownWeather { row: usize, code: i64 },

    #[error("Row {row}: cannot parse timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Row {row}: total count {total} does not equal casual {casual} + registered {registered}")]
    UnbalancedTotal {
        row: usize,
        casual: u64,
        registered: u64,
        total: u64,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read CSV data from '{0}'")]
    CsvReadIo(PathBuf, #[source] PolarsError),

    #[error("Failed to parse CSV data")]
    CsvReadPolars(#[source] PolarsError),

    #[error("Required column '{0}' not found in rental data")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' has type {dtype}, expected {expected}")]
    ColumnType {
        column: String,
        dtype: DataType,
        expected: &'static str,
    },

    #[error("Failed to convert column '{column}'")]
    ColumnCast {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
}
