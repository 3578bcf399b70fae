//! Point-in-time weather and air quality state
//!
//! A snapshot is an immutable copy of what the app last cached in the
//! shared preference store. Every field is optional; the assembler
//! substitutes documented defaults for anything missing.

use serde::{Deserialize, Serialize};

/// Number of forecast days a snapshot carries
pub const FORECAST_DAYS: usize = 5;

/// Maximum number of hourly entries a snapshot carries
pub const HOURLY_ENTRIES: usize = 5;

/// One day of the multi-day forecast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short day name, e.g. "Mon"
    pub name: Option<String>,
    /// Preformatted high/low, e.g. "21°/12°"
    pub temp: Option<String>,
    /// Free-text condition
    pub condition: Option<String>,
}

impl ForecastDay {
    /// Create a fully populated day
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        temp: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            temp: Some(temp.into()),
            condition: Some(condition.into()),
        }
    }
}

/// One entry of the short-range hourly forecast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Hour label, e.g. "14:00"
    pub time: Option<String>,
    /// Preformatted temperature
    pub temp: Option<String>,
    /// Free-text condition
    pub condition: Option<String>,
}

impl HourlyEntry {
    /// Create a fully populated entry
    #[must_use]
    pub fn new(
        time: impl Into<String>,
        temp: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            time: Some(time.into()),
            temp: Some(temp.into()),
            condition: Some(condition.into()),
        }
    }
}

/// Cached weather/AQI state as read from the store
///
/// `forecast_days[i]` is day slot `i + 1`; `hourly[i]` is hour slot `i`.
/// Entries beyond [`FORECAST_DAYS`] / [`HOURLY_ENTRIES`] are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: Option<String>,
    pub condition: Option<String>,
    pub location: Option<String>,
    pub feels_like: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
    pub is_night: Option<bool>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub aqi_value: Option<i64>,
    pub aqi_description: Option<String>,
    pub pm25: Option<String>,
    #[serde(default)]
    pub forecast_days: Vec<ForecastDay>,
    #[serde(default)]
    pub hourly: Vec<HourlyEntry>,
}

impl WeatherSnapshot {
    /// Whether the snapshot says it is currently night
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.is_night.unwrap_or(false)
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub const fn with_night(mut self, is_night: bool) -> Self {
        self.is_night = Some(is_night);
        self
    }

    #[must_use]
    pub fn with_aqi(mut self, value: i64, description: impl Into<String>) -> Self {
        self.aqi_value = Some(value);
        self.aqi_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_forecast_days(mut self, days: Vec<ForecastDay>) -> Self {
        self.forecast_days = days;
        self
    }

    #[must_use]
    pub fn with_hourly(mut self, hourly: Vec<HourlyEntry>) -> Self {
        self.hourly = hourly;
        self
    }
}
