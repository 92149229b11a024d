use crate::aggregation::group::{group_by, CountTotals};
use crate::types::rental_record::RentalRecord;
use crate::types::summary::WeatherTotals;

/// Sums the raw records of each weather situation present, ascending by code.
///
/// Takes the filtered records rather than the time buckets: weather changes
/// hour to hour and a daily bucket only keeps its worst code.
pub fn aggregate_by_weather(records: &[RentalRecord]) -> Vec<WeatherTotals> {
    group_by::<_, _, CountTotals>(records, |record| record.weather)
        .into_iter()
        .map(|(weather, counts)| WeatherTotals {
            weather,
            casual_count: counts.casual.finish(),
            registered_count: counts.registered.finish(),
            total_count: counts.total.finish(),
        })
        .collect()
}
