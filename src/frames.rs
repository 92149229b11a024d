//! Polars views of the aggregate tables, for sinks that expect a `DataFrame`.

use crate::types::rental_record::RiderCounts;
use crate::types::summary::{RiderTotals, SeasonTotals, TimeBucketSummary, WeatherTotals};
use chrono::NaiveDateTime;
use polars::prelude::*;

pub const COL_TIMESTAMP: &str = "timestamp";
pub const COL_EVENT_COUNT: &str = "event_count";
pub const COL_SEASON: &str = "season";
pub const COL_WEATHER: &str = "weather";
pub const COL_CASUAL_COUNT: &str = "casual_count";
pub const COL_REGISTERED_COUNT: &str = "registered_count";
pub const COL_TOTAL_COUNT: &str = "total_count";
pub const COL_CUSTOMER_TYPE: &str = "customer_type";
pub const COL_FREQUENCY: &str = "frequency";

/// Converts an aggregate table into an eager `DataFrame` with stable column names.
///
/// # Examples
///
/// ```
/// use rentalstat::{IntoFrame, RiderTotals};
///
/// let totals = RiderTotals { casual: 6, registered: 15, total_rentals: 21 };
/// let df = totals.to_frame().unwrap();
/// assert_eq!(df.shape(), (2, 2));
/// ```
pub trait IntoFrame {
    fn to_frame(&self) -> PolarsResult<DataFrame>;
}

fn count_columns<T: RiderCounts>(rows: &[T]) -> [Column; 3] {
    let casual: Vec<u64> = rows.iter().map(RiderCounts::casual_count).collect();
    let registered: Vec<u64> = rows.iter().map(RiderCounts::registered_count).collect();
    let total: Vec<u64> = rows.iter().map(RiderCounts::total_count).collect();
    [
        Column::new(COL_CASUAL_COUNT.into(), casual),
        Column::new(COL_REGISTERED_COUNT.into(), registered),
        Column::new(COL_TOTAL_COUNT.into(), total),
    ]
}

impl IntoFrame for [TimeBucketSummary] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let timestamps: Vec<NaiveDateTime> = self.iter().map(|b| b.timestamp).collect();
        let event_counts: Vec<u64> = self.iter().map(|b| b.event_count).collect();
        let seasons: Vec<i32> = self.iter().map(|b| i32::from(b.season)).collect();
        let weathers: Vec<i32> = self.iter().map(|b| i32::from(b.weather)).collect();

        let mut columns = vec![
            Column::new(COL_TIMESTAMP.into(), timestamps),
            Column::new(COL_EVENT_COUNT.into(), event_counts),
            Column::new(COL_SEASON.into(), seasons),
            Column::new(COL_WEATHER.into(), weathers),
        ];
        columns.extend(count_columns(self));
        DataFrame::new(columns)
    }
}

impl IntoFrame for [SeasonTotals] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let seasons: Vec<i32> = self.iter().map(|s| i32::from(s.season)).collect();
        let mut columns = vec![Column::new(COL_SEASON.into(), seasons)];
        columns.extend(count_columns(self));
        DataFrame::new(columns)
    }
}

impl IntoFrame for [WeatherTotals] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let weathers: Vec<i32> = self.iter().map(|w| i32::from(w.weather)).collect();
        let mut columns = vec![Column::new(COL_WEATHER.into(), weathers)];
        columns.extend(count_columns(self));
        DataFrame::new(columns)
    }
}

impl IntoFrame for RiderTotals {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let rows = self.rows();
        let customer_types: Vec<&str> = rows.iter().map(|r| r.customer_type.label()).collect();
        let frequencies: Vec<u64> = rows.iter().map(|r| r.frequency).collect();
        DataFrame::new(vec![
            Column::new(COL_CUSTOMER_TYPE.into(), customer_types),
            Column::new(COL_FREQUENCY.into(), frequencies),
        ])
    }
}
