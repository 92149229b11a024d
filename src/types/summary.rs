//! Row types of the aggregate tables handed to the presentation layer.
//!
//! Field names are part of the downstream contract: JSON output uses the
//! camelCase forms (`eventCount`, `casualCount`, ...), Polars frames the
//! snake_case forms (see [`crate::IntoFrame`]).

use crate::types::rental_record::RiderCounts;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// One time bucket (an hour or a calendar day) of rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucketSummary {
    /// Start of the bucket.
    pub timestamp: NaiveDateTime,
    /// Number of distinct record ids that fell into the bucket.
    pub event_count: u64,
    /// Largest season code seen in the bucket.
    pub season: u8,
    /// Largest weather code seen in the bucket.
    pub weather: u8,
    pub casual_count: u64,
    pub registered_count: u64,
    pub total_count: u64,
}

/// Rider counts summed over every time bucket of one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    pub season: u8,
    pub casual_count: u64,
    pub registered_count: u64,
    pub total_count: u64,
}

/// Rider counts summed over every raw record of one weather situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherTotals {
    pub weather: u8,
    pub casual_count: u64,
    pub registered_count: u64,
    pub total_count: u64,
}

macro_rules! impl_rider_counts {
    ($($ty:ty),+) => {
        $(
            impl RiderCounts for $ty {
                fn casual_count(&self) -> u64 {
                    self.casual_count
                }

                fn registered_count(&self) -> u64 {
                    self.registered_count
                }

                fn total_count(&self) -> u64 {
                    self.total_count
                }
            }
        )+
    };
}

impl_rider_counts!(TimeBucketSummary, SeasonTotals, WeatherTotals);

/// The two rider categories tracked throughout the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CustomerType {
    Casual,
    Registered,
}

impl CustomerType {
    /// Reads this category's count from any row carrying rider counts.
    pub fn count_of(self, row: &impl RiderCounts) -> u64 {
        match self {
            CustomerType::Casual => row.casual_count(),
            CustomerType::Registered => row.registered_count(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerType::Casual => "Casual",
            CustomerType::Registered => "Registered",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the two-row casual/registered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFrequency {
    pub customer_type: CustomerType,
    pub frequency: u64,
}

/// Casual and registered totals of a query, plus the overall rental count.
///
/// Serializes as the two-row `[{customerType, frequency}, ...]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiderTotals {
    pub casual: u64,
    pub registered: u64,
    /// Sum of `total_count` over the same rows.
    pub total_rentals: u64,
}

impl RiderTotals {
    /// The fixed two-row breakdown, casual first.
    pub fn rows(&self) -> [CustomerFrequency; 2] {
        [
            CustomerFrequency {
                customer_type: CustomerType::Casual,
                frequency: self.casual,
            },
            CustomerFrequency {
                customer_type: CustomerType::Registered,
                frequency: self.registered,
            },
        ]
    }

    pub fn frequency(&self, customer_type: CustomerType) -> u64 {
        match customer_type {
            CustomerType::Casual => self.casual,
            CustomerType::Registered => self.registered,
        }
    }

    /// `total_rentals == casual + registered`.
    pub fn is_balanced(&self) -> bool {
        self.casual
            .checked_add(self.registered)
            .is_some_and(|sum| sum == self.total_rentals)
    }

    /// Percentage (0-100) of rentals made by `customer_type`; 0.0 when nothing was rented.
    pub fn share(&self, customer_type: CustomerType) -> f64 {
        let all = self.casual.saturating_add(self.registered);
        if all == 0 {
            return 0.0;
        }
        self.frequency(customer_type) as f64 * 100.0 / all as f64
    }
}

impl Serialize for RiderTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}
