use crate::aggregation::group::{group_by, Accumulate, CountDistinct, CountTotals, Max};
use crate::types::granularity::Granularity;
use crate::types::rental_record::RentalRecord;
use crate::types::summary::TimeBucketSummary;

/// How a bucket whose records carry different season or weather codes is
/// reduced to a single code: the numerically largest one wins.
///
/// This is a lossy approximation (a day straddling two seasons reports the
/// later one), kept so results match the established dashboard output.
pub type BucketCode = Max<u8>;

#[derive(Default)]
struct BucketAccumulator {
    ids: CountDistinct<u64>,
    season: BucketCode,
    weather: BucketCode,
    counts: CountTotals,
}

impl Accumulate<RentalRecord> for BucketAccumulator {
    fn accumulate(&mut self, record: &RentalRecord) {
        self.ids.push(record.id);
        self.season.push(record.season);
        self.weather.push(record.weather);
        self.counts.accumulate(record);
    }
}

/// Rolls `records` up into one row per non-empty hour or day, oldest first.
///
/// Empty buckets are not synthesized; an empty input gives an empty output.
pub fn aggregate_by_time(
    records: &[RentalRecord],
    granularity: Granularity,
) -> Vec<TimeBucketSummary> {
    group_by::<_, _, BucketAccumulator>(records, |record| {
        granularity.truncate(record.timestamp)
    })
    .into_iter()
    .map(|(timestamp, bucket)| TimeBucketSummary {
        timestamp,
        event_count: bucket.ids.finish(),
        season: bucket.season.finish().unwrap_or_default(),
        weather: bucket.weather.finish().unwrap_or_default(),
        casual_count: bucket.counts.casual.finish(),
        registered_count: bucket.counts.registered.finish(),
        total_count: bucket.counts.total.finish(),
    })
    .collect()
}
