use crate::types::traits::types::StartEndDate;
use chrono::NaiveDate;
use thiserror::Error;

/// A query range that cannot produce a meaningful result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("Start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error("Range {requested} lies entirely outside the data ({available})")]
    OutsideDataset {
        requested: StartEndDate,
        available: StartEndDate,
    },

    #[error("No rental records loaded, a start and end date are required")]
    EmptyStore,
}
