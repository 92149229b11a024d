//! This module provides the main entry point for querying rental summaries.
//! A [`RentalDashboard`] owns a loaded [`RecordStore`] and answers range
//! queries with an [`AggregationReport`].

use crate::aggregation::bucket::resolve_granularity;
use crate::aggregation::error::InvalidRangeError;
use crate::aggregation::season::aggregate_by_season;
use crate::aggregation::time::aggregate_by_time;
use crate::aggregation::totals::aggregate_totals;
use crate::aggregation::weather::aggregate_by_weather;
use crate::error::RentalStatError;
use crate::records::data_loader::RecordLoader;
use crate::records::store::RecordStore;
use crate::types::granularity::Granularity;
use crate::types::summary::{RiderTotals, SeasonTotals, TimeBucketSummary, WeatherTotals};
use crate::types::traits::any::any_date::{AnyDate, DateBound};
use crate::types::traits::types::StartEndDate;
use bon::bon;
use log::{debug, warn};
use serde::Serialize;
use std::path::Path;

/// Everything the summary displays need for one selected date range.
///
/// Reports are plain values, rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    /// The (resolved) range that was queried.
    pub range: StartEndDate,
    /// Bucket width used for `time_summary`.
    pub granularity: Granularity,
    pub time_summary: Vec<TimeBucketSummary>,
    pub season_summary: Vec<SeasonTotals>,
    /// Built from the filtered hourly records, not from `time_summary`.
    pub weather_summary: Vec<WeatherTotals>,
    pub totals: RiderTotals,
}

impl AggregationReport {
    /// `true` when no record fell in the range; all tables are then empty.
    pub fn is_empty(&self) -> bool {
        self.time_summary.is_empty()
    }

    pub fn total_rentals(&self) -> u64 {
        self.totals.total_rentals
    }

    pub fn casual_total(&self) -> u64 {
        self.totals.casual
    }

    pub fn registered_total(&self) -> u64 {
        self.totals.registered
    }

    /// Serializes the report using the camelCase field names of the output schema.
    pub fn to_json(&self) -> Result<String, RentalStatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The query front-end over a [`RecordStore`].
///
/// # Examples
///
/// ```rust
/// use rentalstat::{Granularity, RecordLoader, RentalDashboard, RentalStatError};
///
/// # fn main() -> Result<(), RentalStatError> {
/// let csv = "instant;dteday;hr;season;weathersit;casual;registered;cnt\n\
///            1;2011-01-01;0;1;1;3;13;16\n\
///            2;2011-01-01;1;1;2;8;32;40\n\
///            3;2011-01-02;0;1;1;5;27;32\n";
/// let dashboard = RentalDashboard::new(RecordLoader::default().load_bytes(csv.as_bytes())?);
///
/// // Whole dataset: one row per day.
/// let report = dashboard.run_aggregation().call()?;
/// assert_eq!(report.granularity, Granularity::Daily);
/// assert_eq!(report.time_summary.len(), 2);
/// assert_eq!(report.total_rentals(), 88);
///
/// // A single day: one row per hour.
/// let report = dashboard
///     .run_aggregation()
///     .start("2011-01-01")
///     .end("2011-01-01")
///     .call()?;
/// assert_eq!(report.granularity, Granularity::Hourly);
/// assert_eq!(report.casual_total(), 11);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RentalDashboard {
    store: RecordStore,
}

#[bon]
impl RentalDashboard {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Loads a `;`-separated rental CSV with default options and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`RentalStatError::Load`] if the file cannot be read or a row is malformed.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, RentalStatError> {
        Ok(Self::new(RecordLoader::default().load_path(path)?))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Filters the store to a date range and derives every summary table from it.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(impl Into<DateBound>)`: Optional. First day (inclusive). Accepts a
    ///   `NaiveDate`, a `"YYYY-MM-DD"` string, a [`crate::Year`] or a [`crate::Month`]
    ///   (which start at their first day). Defaults to the earliest day in the store.
    /// * `.end(impl Into<DateBound>)`: Optional. Last day (inclusive); years and months
    ///   end at their last day. Defaults to the latest day in the store.
    ///
    /// A one-day range is bucketed hourly, anything longer daily.
    ///
    /// # Errors
    ///
    /// Returns [`RentalStatError::DateParsing`] if a bound cannot be resolved to a date,
    /// and [`RentalStatError::InvalidRange`] if the start lies after the end, the range
    /// misses the data entirely, or the store is empty and a bound was left out.
    /// A range that matches no record inside the data is *not* an error: the
    /// report is simply empty.
    #[builder]
    pub fn run_aggregation(
        &self,
        #[builder(into)] start: Option<DateBound>,
        #[builder(into)] end: Option<DateBound>,
    ) -> Result<AggregationReport, RentalStatError> {
        let range = self.resolve_range(start, end)?;
        let records = self.store.filter(range.start, range.end);
        let granularity = resolve_granularity(range.start, range.end);
        debug!(
            "Aggregating {} records for {} with {} buckets",
            records.len(),
            range,
            granularity
        );

        let time_summary = aggregate_by_time(&records, granularity);
        let season_summary = aggregate_by_season(&time_summary);
        let weather_summary = aggregate_by_weather(&records);
        let totals = aggregate_totals(&time_summary);

        if time_summary.is_empty() {
            warn!("No rental records between {}, returning empty summaries", range);
        }
        if !totals.is_balanced() {
            warn!(
                "Rental totals out of balance for {}: {} casual + {} registered != {} total",
                range, totals.casual, totals.registered, totals.total_rentals
            );
        }

        Ok(AggregationReport {
            range,
            granularity,
            time_summary,
            season_summary,
            weather_summary,
            totals,
        })
    }

    /// Turns the optional query bounds into a validated date range.
    fn resolve_range(
        &self,
        start: Option<DateBound>,
        end: Option<DateBound>,
    ) -> Result<StartEndDate, RentalStatError> {
        let available = self.store.date_bounds();

        let start = match start {
            Some(bound) => resolve_bound(bound)?.start,
            None => available.ok_or(InvalidRangeError::EmptyStore)?.start,
        };
        let end = match end {
            Some(bound) => resolve_bound(bound)?.end,
            None => available.ok_or(InvalidRangeError::EmptyStore)?.end,
        };

        if start > end {
            return Err(InvalidRangeError::StartAfterEnd { start, end }.into());
        }

        let requested = StartEndDate::new(start, end);
        if let Some(available) = available {
            if !requested.overlaps(&available) {
                return Err(InvalidRangeError::OutsideDataset {
                    requested,
                    available,
                }
                .into());
            }
        }
        Ok(requested)
    }
}

fn resolve_bound(bound: DateBound) -> Result<StartEndDate, RentalStatError> {
    let text = bound.to_string();
    bound
        .get_date_range()
        .ok_or(RentalStatError::DateParsing(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rental_record::tests::record;
    use crate::types::rental_record::RentalRecord;
    use crate::types::summary::CustomerType;
    use crate::types::traits::types::{Month, Year};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    /// Three hourly rows on 2024-01-01.
    fn scenario_records() -> Vec<RentalRecord> {
        vec![
            record(1, (2024, 1, 1, 0), 1, 1, 1, 4),
            record(2, (2024, 1, 1, 1), 1, 2, 2, 5),
            record(3, (2024, 1, 1, 2), 2, 1, 3, 6),
        ]
    }

    fn dashboard(records: Vec<RentalRecord>) -> RentalDashboard {
        RentalDashboard::new(RecordStore::from_records(records).unwrap())
    }

    #[test]
    fn test_single_day_query_is_hourly() -> Result<(), RentalStatError> {
        let report = dashboard(scenario_records())
            .run_aggregation()
            .start(day(1))
            .end(day(1))
            .call()?;

        assert_eq!(report.granularity, Granularity::Hourly);
        assert_eq!(report.time_summary.len(), 3);
        assert_eq!(
            report.season_summary,
            [
                SeasonTotals {
                    season: 1,
                    casual_count: 3,
                    registered_count: 9,
                    total_count: 12
                },
                SeasonTotals {
                    season: 2,
                    casual_count: 3,
                    registered_count: 6,
                    total_count: 9
                },
            ]
        );
        assert_eq!(report.totals.frequency(CustomerType::Casual), 6);
        assert_eq!(report.totals.frequency(CustomerType::Registered), 15);
        Ok(())
    }

    #[test]
    fn test_two_day_query_is_daily_and_weather_stays_hourly() -> Result<(), RentalStatError> {
        let report = dashboard(scenario_records())
            .run_aggregation()
            .start(day(1))
            .end(day(2))
            .call()?;

        assert_eq!(report.granularity, Granularity::Daily);
        assert_eq!(report.time_summary.len(), 1);
        assert_eq!(report.time_summary[0].event_count, 3);
        assert_eq!(report.time_summary[0].weather, 2);

        assert_eq!(report.weather_summary.len(), 2);
        assert_eq!(report.weather_summary[0].weather, 1);
        assert_eq!(report.weather_summary[0].casual_count, 4);
        assert_eq!(report.weather_summary[0].registered_count, 10);
        assert_eq!(report.weather_summary[1].weather, 2);
        assert_eq!(report.weather_summary[1].casual_count, 2);
        assert_eq!(report.weather_summary[1].registered_count, 5);
        Ok(())
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = dashboard(scenario_records())
            .run_aggregation()
            .start(day(2))
            .end(day(1))
            .call()
            .unwrap_err();
        assert!(matches!(
            err,
            RentalStatError::InvalidRange(InvalidRangeError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_range_outside_data_is_rejected() {
        let err = dashboard(scenario_records())
            .run_aggregation()
            .start("2023-06-01")
            .end("2023-06-30")
            .call()
            .unwrap_err();
        assert!(matches!(
            err,
            RentalStatError::InvalidRange(InvalidRangeError::OutsideDataset { .. })
        ));
    }

    #[test]
    fn test_gap_inside_data_gives_empty_report() -> Result<(), RentalStatError> {
        let mut records = scenario_records();
        records.push(record(4, (2024, 1, 5, 0), 1, 1, 1, 1));
        let report = dashboard(records)
            .run_aggregation()
            .start(day(2))
            .end(day(3))
            .call()?;

        assert!(report.is_empty());
        assert!(report.season_summary.is_empty());
        assert!(report.weather_summary.is_empty());
        assert_eq!(report.totals.rows()[0].frequency, 0);
        assert_eq!(report.totals.rows()[1].frequency, 0);
        Ok(())
    }

    #[test]
    fn test_bounds_default_to_data() -> Result<(), RentalStatError> {
        let mut records = scenario_records();
        records.push(record(4, (2024, 1, 3, 0), 4, 3, 10, 10));
        let dashboard = dashboard(records);

        let report = dashboard.run_aggregation().call()?;
        assert_eq!(report.range, StartEndDate::new(day(1), day(3)));
        assert_eq!(report.granularity, Granularity::Daily);
        assert_eq!(report.time_summary.len(), 2);

        let report = dashboard.run_aggregation().start(day(3)).call()?;
        assert_eq!(report.granularity, Granularity::Hourly);
        assert_eq!(report.total_rentals(), 20);
        Ok(())
    }

    #[test]
    fn test_month_and_year_bounds() -> Result<(), RentalStatError> {
        let dashboard = dashboard(scenario_records());
        let by_month = dashboard
            .run_aggregation()
            .start(Month::new(1, 2024))
            .end(Month::new(1, 2024))
            .call()?;
        assert_eq!(by_month.range, StartEndDate::new(day(1), day(31)));

        let by_year = dashboard
            .run_aggregation()
            .start(Year(2024))
            .end(Year(2024))
            .call()?;
        assert_eq!(by_year.total_rentals(), 21);
        assert_eq!(by_year.time_summary, by_month.time_summary);
        Ok(())
    }

    #[test]
    fn test_unparseable_bound() {
        let err = dashboard(scenario_records())
            .run_aggregation()
            .start("yesterday")
            .call()
            .unwrap_err();
        assert!(matches!(&err, RentalStatError::DateParsing(text) if text == "yesterday"));
        assert_eq!(err.to_string(), "Could not resolve 'yesterday' to a date");
    }

    #[test]
    fn test_empty_store_needs_bounds() -> Result<(), RentalStatError> {
        let dashboard = RentalDashboard::new(RecordStore::default());
        assert!(matches!(
            dashboard.run_aggregation().call(),
            Err(RentalStatError::InvalidRange(InvalidRangeError::EmptyStore))
        ));

        let report = dashboard
            .run_aggregation()
            .start(day(1))
            .end(day(2))
            .call()?;
        assert!(report.is_empty());
        Ok(())
    }

    #[test]
    fn test_totals_match_time_and_season_sums_for_every_range() -> Result<(), RentalStatError> {
        let records: Vec<RentalRecord> = (0..24 * 10u64)
            .map(|i| {
                let d = 1 + (i / 24) as u32;
                let season = if d < 6 { 1 } else { 2 };
                let weather = 1 + (i % 3) as u8;
                record(i + 1, (2024, 1, d, (i % 24) as u32), season, weather, i % 7, i % 11)
            })
            .collect();
        let dashboard = dashboard(records);

        for start in 1..=10 {
            for end in start..=10 {
                let report = dashboard
                    .run_aggregation()
                    .start(day(start))
                    .end(day(end))
                    .call()?;
                let time_total: u64 = report.time_summary.iter().map(|b| b.total_count).sum();
                let season_total: u64 =
                    report.season_summary.iter().map(|s| s.total_count).sum();
                let weather_total: u64 =
                    report.weather_summary.iter().map(|w| w.total_count).sum();

                assert_eq!(time_total, report.totals.casual + report.totals.registered);
                assert_eq!(season_total, time_total);
                assert_eq!(weather_total, time_total);
                assert!(report.totals.is_balanced());
            }
        }
        Ok(())
    }

    #[test]
    fn test_report_json_uses_schema_names() -> Result<(), RentalStatError> {
        let report = dashboard(scenario_records())
            .run_aggregation()
            .start(day(1))
            .end(day(1))
            .call()?;
        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

        assert_eq!(json["granularity"], "hourly");
        let bucket = &json["timeSummary"][0];
        for key in [
            "timestamp",
            "eventCount",
            "season",
            "weather",
            "casualCount",
            "registeredCount",
            "totalCount",
        ] {
            assert!(bucket.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["totals"][1]["customerType"], "Registered");
        assert_eq!(json["totals"][1]["frequency"], 15);
        Ok(())
    }
}
