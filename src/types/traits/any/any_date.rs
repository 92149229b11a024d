use crate::types::traits::types::{Month, StartEndDate, Year};
use chrono::{Months, NaiveDate};
use std::fmt;

/// Anything that can be resolved to an inclusive range of calendar days.
///
/// A query start uses the *first* day of the resolved range and a query end the
/// *last*, so `Month::new(3, 2011)` as an end bound means "through March 31st".
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        let naive_date = NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d").ok()?;
        naive_date.get_date_range()
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn get_date_range(self) -> Option<StartEndDate> {
        let start = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(StartEndDate { start, end })
    }
}

/// A query bound as handed to [`crate::RentalDashboard::run_aggregation`].
///
/// Every [`AnyDate`] type converts into it, so the builder setters accept a
/// `NaiveDate`, a `"YYYY-MM-DD"` string, a [`Year`] or a [`Month`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    Date(NaiveDate),
    Text(String),
    Year(Year),
    Month(Month),
}

impl AnyDate for DateBound {
    fn get_date_range(self) -> Option<StartEndDate> {
        match self {
            DateBound::Date(date) => date.get_date_range(),
            DateBound::Text(text) => text.get_date_range(),
            DateBound::Year(year) => year.get_date_range(),
            DateBound::Month(month) => month.get_date_range(),
        }
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Date(date) => write!(f, "{}", date),
            DateBound::Text(text) => write!(f, "{}", text),
            DateBound::Year(year) => write!(f, "{}", year.get()),
            DateBound::Month(month) => write!(f, "{}-{:02}", month.year(), month.month()),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(value: NaiveDate) -> Self {
        DateBound::Date(value)
    }
}

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        DateBound::Text(value.to_string())
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        DateBound::Text(value)
    }
}

impl From<Year> for DateBound {
    fn from(value: Year) -> Self {
        DateBound::Year(value)
    }
}

impl From<Month> for DateBound {
    fn from(value: Month) -> Self {
        DateBound::Month(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_str_parses_iso_date() {
        let range = "2011-01-05".get_date_range().unwrap();
        assert_eq!(range.start, date(2011, 1, 5));
        assert_eq!(range.end, date(2011, 1, 5));
        assert!("05/01/2011".get_date_range().is_none());
        assert!("".get_date_range().is_none());
    }

    #[test]
    fn test_month_covers_whole_month() {
        let range = Month::new(2, 2012).get_date_range().unwrap();
        assert_eq!(range.start, date(2012, 2, 1));
        assert_eq!(range.end, date(2012, 2, 29));
        assert!(Month::new(13, 2012).get_date_range().is_none());
    }

    #[test]
    fn test_year_covers_whole_year() {
        let range = Year(2011).get_date_range().unwrap();
        assert_eq!(range.start, date(2011, 1, 1));
        assert_eq!(range.end, date(2011, 12, 31));
    }

    #[test]
    fn test_date_bound_delegates() {
        let bound: DateBound = "2012-12-31".into();
        assert_eq!(
            bound.get_date_range().map(|r| r.start),
            Some(date(2012, 12, 31))
        );
        let bound: DateBound = Year(2012).into();
        assert_eq!(
            bound.get_date_range().map(|r| r.end),
            Some(date(2012, 12, 31))
        );
    }

    #[test]
    fn test_date_bound_display_shows_input() {
        assert_eq!(DateBound::from("yesterday").to_string(), "yesterday");
        assert_eq!(DateBound::from(date(2011, 3, 4)).to_string(), "2011-03-04");
        assert_eq!(DateBound::from(Year(2012)).to_string(), "2012");
        assert_eq!(DateBound::from(Month::new(7, 2011)).to_string(), "2011-07");
    }
}
