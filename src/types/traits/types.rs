use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);
impl Month {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// An inclusive range of calendar days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &StartEndDate) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Narrows this range to `bounds`, the way a date picker limited to the
    /// dataset would. Returns `None` when the two ranges share no day.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rentalstat::StartEndDate;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2011, 1, d).unwrap();
    /// let bounds = StartEndDate::new(day(1), day(31));
    /// let clamped = StartEndDate::new(day(20), NaiveDate::from_ymd_opt(2011, 2, 3).unwrap())
    ///     .clamp_to(&bounds)
    ///     .unwrap();
    /// assert_eq!(clamped, StartEndDate::new(day(20), day(31)));
    /// ```
    pub fn clamp_to(&self, bounds: &StartEndDate) -> Option<StartEndDate> {
        if self.start > self.end || !self.overlaps(bounds) {
            return None;
        }
        Some(StartEndDate {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        })
    }
}

impl Display for StartEndDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
