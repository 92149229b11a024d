use crate::aggregation::group::{Accumulate, CountTotals};
use crate::types::rental_record::RiderCounts;
use crate::types::summary::RiderTotals;

/// Reduces `rows` to the casual and registered totals plus the overall rental count.
///
/// Normally fed the time buckets of a query; any [`RiderCounts`] rows work.
pub fn aggregate_totals<T: RiderCounts>(rows: &[T]) -> RiderTotals {
    let mut counts = CountTotals::default();
    for row in rows {
        counts.accumulate(row);
    }
    RiderTotals {
        casual: counts.casual.finish(),
        registered: counts.registered.finish(),
        total_rentals: counts.total.finish(),
    }
}
