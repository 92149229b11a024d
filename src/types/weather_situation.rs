//! Defines the `WeatherSituation` enum, mapping the `weathersit` codes of the
//! rental dataset to descriptive variants.

use serde::Serialize;
use std::fmt;

/// Represents the weather situation recorded for an hour of rentals.
///
/// The dataset uses four codes, ordered from best to worst weather. Because the
/// codes are ordinal, taking the maximum code of a bucket keeps its worst weather.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum WeatherSituation {
    /// Code 1: Clear, few clouds, partly cloudy.
    Clear = 1,
    /// Code 2: Mist, possibly with broken clouds.
    Mist = 2,
    /// Code 3: Light snow or light rain, scattered clouds, thunderstorm.
    LightPrecipitation = 3,
    /// Code 4: Heavy rain, ice pellets, snow and fog.
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    /// Attempts to convert a `weathersit` code into a `WeatherSituation` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherSituation)` for codes 1-4.
    /// * `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rentalstat::WeatherSituation;
    ///
    /// assert_eq!(WeatherSituation::from_i64(2), Some(WeatherSituation::Mist));
    /// assert_eq!(WeatherSituation::from_i64(9), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Mist),
            3 => Some(WeatherSituation::LightPrecipitation),
            4 => Some(WeatherSituation::HeavyPrecipitation),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear",
            WeatherSituation::Mist => "Mist",
            WeatherSituation::LightPrecipitation => "Light precipitation",
            WeatherSituation::HeavyPrecipitation => "Heavy precipitation",
        }
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
