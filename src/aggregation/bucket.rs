use crate::types::granularity::Granularity;
use chrono::NaiveDate;

/// Picks the bucket width for a query: hourly for a single day, daily otherwise.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rentalstat::{resolve_granularity, Granularity};
///
/// let d1 = NaiveDate::from_ymd_opt(2012, 5, 1).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2012, 5, 2).unwrap();
/// assert_eq!(resolve_granularity(d1, d1), Granularity::Hourly);
/// assert_eq!(resolve_granularity(d1, d2), Granularity::Daily);
/// ```
pub fn resolve_granularity(start: NaiveDate, end: NaiveDate) -> Granularity {
    if start == end {
        Granularity::Hourly
    } else {
        Granularity::Daily
    }
}
