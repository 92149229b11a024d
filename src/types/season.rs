//! Defines the `Season` enum, mapping the numeric season codes of the rental
//! dataset to descriptive variants.

use serde::Serialize;
use std::fmt;

/// Represents the season code attached to every hourly rental record.
///
/// Aggregates keep the raw code (see [`crate::TimeBucketSummary::season`]); this enum
/// is used to validate codes on load and to label them for display.
///
/// # Examples
///
/// ```rust
/// use rentalstat::Season;
///
/// assert_eq!(Season::from_i64(3), Some(Season::Fall));
/// assert_eq!(Season::from_i64(0), None);
/// assert_eq!(Season::Winter.code(), 4);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Season {
    /// Code 1.
    Spring = 1,
    /// Code 2.
    Summer = 2,
    /// Code 3.
    Fall = 3,
    /// Code 4.
    Winter = 4,
}

impl Season {
    /// Converts a season code into a `Season`, returning `None` for codes outside `1..=4`.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
