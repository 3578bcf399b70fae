//! Widget variant identifiers
//!
//! Each variant is one home-screen widget kind with its own element
//! schema and breakpoint table (see [`crate::registry`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Supported widget kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetVariant {
    /// Air quality value with color-coded description and progress bar
    AqiCompact,
    /// Location plus a five-day forecast row
    ForecastRow,
    /// Sunrise and sunset times around a sun icon
    SunPath,
    /// Temperature, location and icon
    WeatherSmall,
    /// Small layout plus condition, feels-like and humidity
    WeatherMedium,
    /// Current wind speed
    Wind,
}

impl WidgetVariant {
    /// Every variant, in registry order
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::AqiCompact,
            Self::ForecastRow,
            Self::SunPath,
            Self::WeatherSmall,
            Self::WeatherMedium,
            Self::Wind,
        ]
    }

    /// Stable kebab-case identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AqiCompact => "aqi-compact",
            Self::ForecastRow => "forecast-row",
            Self::SunPath => "sun-path",
            Self::WeatherSmall => "weather-small",
            Self::WeatherMedium => "weather-medium",
            Self::Wind => "wind",
        }
    }
}

impl fmt::Display for WidgetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WidgetVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|v| v.id() == needle)
            .ok_or_else(|| DomainError::UnknownVariant(s.to_string()))
    }
}
