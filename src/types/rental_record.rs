use crate::records::error::MalformedRecordError;
use crate::types::season::Season;
use crate::types::weather_situation::WeatherSituation;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One hour of rentals, as read from the source table.
///
/// Records are plain values: the [`crate::RecordStore`] owns them and the
/// aggregators only ever read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecord {
    /// Unique, monotonic row identifier (`instant` in the source).
    pub id: u64,
    pub timestamp: NaiveDateTime,
    /// Season code, see [`Season`].
    pub season: u8,
    /// Weather code, see [`WeatherSituation`].
    pub weather: u8,
    pub casual_count: u64,
    pub registered_count: u64,
    /// Expected to equal `casual_count + registered_count`.
    pub total_count: u64,
}

impl RentalRecord {
    pub fn season(&self) -> Option<Season> {
        Season::from_i64(i64::from(self.season))
    }

    pub fn weather(&self) -> Option<WeatherSituation> {
        WeatherSituation::from_i64(i64::from(self.weather))
    }

    /// Checks the invariants every stored record must satisfy.
    ///
    /// `row` is only used to locate the offending record in the error.
    pub(crate) fn validate(&self, row: usize) -> Result<(), MalformedRecordError> {
        if self.season().is_none() {
            return Err(MalformedRecordError::UnknownSeason {
                row,
                code: i64::from(self.season),
            });
        }
        if self.weather().is_none() {
            return Err(MalformedRecordError::UnknownWeather {
                row,
                code: i64::from(self.weather),
            });
        }
        let balanced = self
            .casual_count
            .checked_add(self.registered_count)
            .is_some_and(|sum| sum == self.total_count);
        if !balanced {
            return Err(MalformedRecordError::UnbalancedTotal {
                row,
                casual: self.casual_count,
                registered: self.registered_count,
                total: self.total_count,
            });
        }
        Ok(())
    }
}

/// Access to the three rider counts shared by raw records and aggregated rows.
///
/// The season, weather and totals reductions are written against this trait so
/// they work on [`RentalRecord`]s and [`crate::TimeBucketSummary`] rows alike.
pub trait RiderCounts {
    fn casual_count(&self) -> u64;
    fn registered_count(&self) -> u64;
    fn total_count(&self) -> u64;
}

impl RiderCounts for RentalRecord {
    fn casual_count(&self) -> u64 {
        self.casual_count
    }

    fn registered_count(&self) -> u64 {
        self.registered_count
    }

    fn total_count(&self) -> u64 {
        self.total_count
    }
}
