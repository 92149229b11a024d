//! The in-memory table of rental records every query runs against.

use crate::filtering::filter_range;
use crate::records::error::MalformedRecordError;
use crate::types::rental_record::RentalRecord;
use crate::types::traits::types::StartEndDate;
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use std::collections::HashSet;

/// The full rental table, sorted by record id.
///
/// Built once (from a CSV via [`crate::RecordLoader`] or from records directly)
/// and read-only afterwards. Pass it to [`crate::RentalDashboard::new`] to run
/// queries; nothing in the crate keeps a store in global state.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RentalRecord>,
}

impl RecordStore {
    /// Validates `records` and sorts them by id.
    ///
    /// # Errors
    ///
    /// Returns the first [`MalformedRecordError`] found; its `row` is the index in `records`.
    /// Duplicate ids are kept (and logged) since the time rollup counts distinct ids.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Result<Self, MalformedRecordError> {
        for (row, record) in records.iter().enumerate() {
            record.validate(row)?;
        }

        let mut seen = HashSet::with_capacity(records.len());
        let duplicates = records.iter().filter(|r| !seen.insert(r.id)).count();
        if duplicates > 0 {
            warn!("Rental data contains {} rows with a duplicate id", duplicates);
        }

        records.sort_by_key(|r| r.id);
        info!("Loaded {} rental records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest timestamp in the store, `None` when empty.
    pub fn timestamp_bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let min = self.records.iter().map(|r| r.timestamp).min()?;
        let max = self.records.iter().map(|r| r.timestamp).max()?;
        Some((min, max))
    }

    /// The calendar days spanned by the store, `None` when empty.
    pub fn date_bounds(&self) -> Option<StartEndDate> {
        self.timestamp_bounds()
            .map(|(min, max)| StartEndDate::new(min.date(), max.date()))
    }

    /// Records whose timestamp falls on a day in `start..=end`, in store order.
    pub fn filter(&self, start: NaiveDate, end: NaiveDate) -> Vec<RentalRecord> {
        filter_range(&self.records, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rental_record::tests::record;

    #[test]
    fn test_from_records_sorts_by_id() {
        let store = RecordStore::from_records(vec![
            record(3, (2011, 1, 1, 2), 1, 1, 1, 1),
            record(1, (2011, 1, 1, 0), 1, 1, 1, 1),
            record(2, (2011, 1, 1, 1), 1, 1, 1, 1),
        ])
        .unwrap();
        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_from_records_rejects_malformed_row() {
        let result = RecordStore::from_records(vec![
            record(1, (2011, 1, 1, 0), 1, 1, 1, 1),
            record(2, (2011, 1, 1, 1), 9, 1, 1, 1),
        ]);
        assert_eq!(
            result.unwrap_err(),
            MalformedRecordError::UnknownSeason { row: 1, code: 9 }
        );
    }

    #[test]
    fn test_bounds() {
        let store = RecordStore::from_records(vec![
            record(1, (2011, 1, 1, 5), 1, 1, 1, 1),
            record(2, (2011, 1, 3, 23), 1, 1, 1, 1),
        ])
        .unwrap();
        let bounds = store.date_bounds().unwrap();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2011, 1, 3).unwrap());

        assert!(RecordStore::default().date_bounds().is_none());
        assert!(RecordStore::default().is_empty());
    }
}
