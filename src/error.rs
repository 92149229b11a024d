use crate::aggregation::error::InvalidRangeError;
use crate::records::error::{LoadError, MalformedRecordError};
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalStatError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),

    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("Could not resolve '{0}' to a date")]
    DateParsing(String),

    #[error("Failed to build output frame")]
    Frame(#[from] PolarsError),

    #[error("Failed to serialize aggregation report")]
    Serialize(#[from] serde_json::Error),
}
