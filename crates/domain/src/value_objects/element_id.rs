//! Named element slots that render plans address

use serde::{Deserialize, Serialize};
use std::fmt;

/// An element slot in a widget, notification or list-item layout
///
/// Ordering is declaration order, which keeps plan maps stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    // AQI
    AqiValue,
    AqiDescription,
    AqiPm25,
    AqiProgress,
    /// Group holding description and PM2.5
    AqiDetails,

    // Current weather
    Temperature,
    Location,
    Condition,
    WeatherIcon,
    FeelsLike,
    Humidity,
    /// Group holding feels-like and humidity
    WeatherDetails,

    // Sun path
    SunIcon,
    /// Group holding the sunrise label and time
    SunriseLayout,
    Sunrise,
    Sunset,

    // Wind
    WindSpeed,

    // Forecast container and per-day items
    ForecastDays,
    DayName,
    DayTemp,
    DayIcon,

    // Notification
    HighLow,
    Updated,
    HourlyForecast,
    HourlyTime,
    HourlyTemp,
    HourlyIcon,
}

impl ElementId {
    /// snake_case name, identical to the serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AqiValue => "aqi_value",
            Self::AqiDescription => "aqi_description",
            Self::AqiPm25 => "aqi_pm25",
            Self::AqiProgress => "aqi_progress",
            Self::AqiDetails => "aqi_details",
            Self::Temperature => "temperature",
            Self::Location => "location",
            Self::Condition => "condition",
            Self::WeatherIcon => "weather_icon",
            Self::FeelsLike => "feels_like",
            Self::Humidity => "humidity",
            Self::WeatherDetails => "weather_details",
            Self::SunIcon => "sun_icon",
            Self::SunriseLayout => "sunrise_layout",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::WindSpeed => "wind_speed",
            Self::ForecastDays => "forecast_days",
            Self::DayName => "day_name",
            Self::DayTemp => "day_temp",
            Self::DayIcon => "day_icon",
            Self::HighLow => "high_low",
            Self::Updated => "updated",
            Self::HourlyForecast => "hourly_forecast",
            Self::HourlyTime => "hourly_time",
            Self::HourlyTemp => "hourly_temp",
            Self::HourlyIcon => "hourly_icon",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
