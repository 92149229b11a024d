use crate::aggregation::group::{group_by, CountTotals};
use crate::types::summary::{SeasonTotals, TimeBucketSummary};

/// Sums the time buckets of each season present, ascending by season code.
///
/// Works on the *bucketed* rows, so every bucket counts toward the single
/// season code it was reduced to.
pub fn aggregate_by_season(buckets: &[TimeBucketSummary]) -> Vec<SeasonTotals> {
    group_by::<_, _, CountTotals>(buckets, |bucket| bucket.season)
        .into_iter()
        .map(|(season, counts)| SeasonTotals {
            season,
            casual_count: counts.casual.finish(),
            registered_count: counts.registered.finish(),
            total_count: counts.total.finish(),
        })
        .collect()
}
