//! Defines the time-bucket granularity used when rolling up rental records.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;
use std::fmt;

/// The width of the time buckets produced by [`crate::aggregate_by_time`].
///
/// Chosen per query by [`crate::resolve_granularity`]: a single-day selection is
/// bucketed by hour, anything longer by calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per clock hour.
    Hourly,
    /// One bucket per calendar day.
    Daily,
}

impl Granularity {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
        }
    }

    /// Floors `timestamp` to the start of the bucket it belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rentalstat::Granularity;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap().and_hms_opt(13, 45, 10).unwrap();
    /// assert_eq!(Granularity::Hourly.truncate(ts).to_string(), "2011-01-01 13:00:00");
    /// assert_eq!(Granularity::Daily.truncate(ts).to_string(), "2011-01-01 00:00:00");
    /// ```
    pub fn truncate(&self, timestamp: NaiveDateTime) -> NaiveDateTime {
        let midnight = timestamp.date().and_time(NaiveTime::MIN);
        match self {
            Granularity::Hourly => midnight + TimeDelta::hours(i64::from(timestamp.hour())),
            Granularity::Daily => midnight,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
