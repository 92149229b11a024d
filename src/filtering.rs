use crate::types::rental_record::RentalRecord;
use chrono::NaiveDate;

/// Selects the records whose timestamp lies in `[start 00:00:00, end 23:59:59]`.
///
/// The input order is preserved and the input is left untouched. Bounds outside
/// the data simply yield an empty or partial subset; a reversed range
/// (`start > end`) selects nothing. Validation of the range is the caller's job,
/// see [`crate::RentalDashboard::run_aggregation`].
///
/// # Arguments
/// * `records`: The records to select from.
/// * `start`: The first day (inclusive).
/// * `end`: The last day (inclusive).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rentalstat::{filter_range, RentalRecord};
///
/// let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
/// let record = RentalRecord {
///     id: 1,
///     timestamp: day.and_hms_opt(23, 0, 0).unwrap(),
///     season: 1,
///     weather: 1,
///     casual_count: 3,
///     registered_count: 13,
///     total_count: 16,
/// };
///
/// assert_eq!(filter_range(&[record], day, day).len(), 1);
/// assert!(filter_range(&[record], day.succ_opt().unwrap(), day.succ_opt().unwrap()).is_empty());
/// ```
pub fn filter_range(records: &[RentalRecord], start: NaiveDate, end: NaiveDate) -> Vec<RentalRecord> {
    let days = start..=end;
    records
        .iter()
        .filter(|record| days.contains(&record.timestamp.date()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rental_record::tests::record;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn sample() -> Vec<RentalRecord> {
        vec![
            record(1, (2011, 1, 1, 0), 1, 1, 1, 1),
            record(2, (2011, 1, 1, 23), 1, 1, 1, 1),
            record(3, (2011, 1, 2, 0), 1, 1, 1, 1),
            record(4, (2011, 1, 2, 12), 1, 1, 1, 1),
            record(5, (2011, 1, 3, 23), 1, 1, 1, 1),
        ]
    }

    fn ids(records: &[RentalRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_single_day_includes_first_and_last_hour() {
        assert_eq!(ids(&filter_range(&sample(), day(1), day(1))), [1, 2]);
    }

    #[test]
    fn test_end_day_is_inclusive() {
        assert_eq!(ids(&filter_range(&sample(), day(2), day(3))), [3, 4, 5]);
    }

    #[test]
    fn test_preserves_input_order() {
        let mut records = sample();
        records.reverse();
        assert_eq!(ids(&filter_range(&records, day(1), day(2))), [4, 3, 2, 1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_range(&sample(), day(2), day(2));
        let twice = filter_range(&once, day(2), day(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_of_range_bounds_are_not_an_error() {
        assert!(filter_range(&sample(), day(10), day(20)).is_empty());
        assert_eq!(ids(&filter_range(&sample(), day(3), day(9))), [5]);
        assert!(filter_range(&sample(), day(3), day(1)).is_empty());
    }
}
