pub mod aggregation;
mod dashboard;
mod error;
mod filtering;
mod frames;
pub mod records;
mod types;

pub use dashboard::*;
pub use error::RentalStatError;
pub use filtering::filter_range;
pub use frames::*;

pub use records::data_loader::{RecordLoader, DEFAULT_SEPARATOR};
pub use records::error::{LoadError, MalformedRecordError};
pub use records::store::RecordStore;

pub use aggregation::bucket::resolve_granularity;
pub use aggregation::error::InvalidRangeError;
pub use aggregation::ranking::rank_by;
pub use aggregation::season::aggregate_by_season;
pub use aggregation::time::{aggregate_by_time, BucketCode};
pub use aggregation::totals::aggregate_totals;
pub use aggregation::weather::aggregate_by_weather;

pub use types::granularity::Granularity;
pub use types::rental_record::{RentalRecord, RiderCounts};
pub use types::season::Season;
pub use types::summary::*;
pub use types::weather_situation::WeatherSituation;

pub use types::traits::any::any_date::{AnyDate, DateBound};
pub use types::traits::types::{Month, StartEndDate, Year};
