//! Preference store key mapping
//!
//! The app writes its cached state into a flat key-value store with loosely
//! typed values. This module maps those keys onto a [`WeatherSnapshot`],
//! treating every key as optional and dropping values whose type cannot be
//! read sensibly rather than failing.

use std::collections::HashMap;

use domain::{FORECAST_DAYS, ForecastDay, HOURLY_ENTRIES, HourlyEntry, WeatherSnapshot};
use serde::{Deserialize, Serialize};

/// A single stored value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl PreferenceValue {
    /// Value as display text; booleans are not text
    fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(format!("{f:.0}")),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(_) => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Float(_) | Self::Bool(_) => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Int(_) | Self::Float(_) => None,
        }
    }
}

/// Raw store contents
pub type PreferenceMap = HashMap<String, PreferenceValue>;

/// Store keys read by the engine
pub mod keys {
    pub const TEMPERATURE: &str = "temperature";
    pub const CONDITION: &str = "condition";
    pub const LOCATION: &str = "location";
    pub const FEELS_LIKE: &str = "feelsLike";
    pub const HUMIDITY: &str = "humidity";
    pub const WIND_SPEED: &str = "windSpeed";
    pub const IS_NIGHT: &str = "isNight";
    pub const SUNRISE: &str = "sunrise";
    pub const SUNSET: &str = "sunset";
    pub const AQI_VALUE: &str = "aqi_value";
    pub const AQI_DESCRIPTION: &str = "aqi_description";
    pub const AQI_PM25: &str = "aqi_pm25";

    /// `dayN_<field>` for forecast day `n` (1-based)
    pub fn day(n: usize, field: &str) -> String {
        format!("day{n}_{field}")
    }

    /// `hourlyN_<field>` for hourly slot `n` (0-based)
    pub fn hourly(n: usize, field: &str) -> String {
        format!("hourly{n}_{field}")
    }
}

fn text(prefs: &PreferenceMap, key: &str) -> Option<String> {
    prefs.get(key).and_then(PreferenceValue::as_text)
}

/// Build a snapshot from raw store contents
///
/// Always yields [`FORECAST_DAYS`] day slots and [`HOURLY_ENTRIES`] hourly
/// slots so that slot numbers survive missing keys.
#[must_use]
pub fn snapshot_from_preferences(prefs: &PreferenceMap) -> WeatherSnapshot {
    let forecast_days = (1..=FORECAST_DAYS)
        .map(|n| ForecastDay {
            name: text(prefs, &keys::day(n, "name")),
            temp: text(prefs, &keys::day(n, "temp")),
            condition: text(prefs, &keys::day(n, "condition")),
        })
        .collect();

    let hourly = (0..HOURLY_ENTRIES)
        .map(|n| HourlyEntry {
            time: text(prefs, &keys::hourly(n, "time")),
            temp: text(prefs, &keys::hourly(n, "temp")),
            condition: text(prefs, &keys::hourly(n, "condition")),
        })
        .collect();

    WeatherSnapshot {
        temperature: text(prefs, keys::TEMPERATURE),
        condition: text(prefs, keys::CONDITION),
        location: text(prefs, keys::LOCATION),
        feels_like: text(prefs, keys::FEELS_LIKE),
        humidity: text(prefs, keys::HUMIDITY),
        wind_speed: text(prefs, keys::WIND_SPEED),
        is_night: prefs.get(keys::IS_NIGHT).and_then(PreferenceValue::as_bool),
        sunrise: text(prefs, keys::SUNRISE),
        sunset: text(prefs, keys::SUNSET),
        aqi_value: prefs.get(keys::AQI_VALUE).and_then(PreferenceValue::as_int),
        aqi_description: text(prefs, keys::AQI_DESCRIPTION),
        pm25: text(prefs, keys::AQI_PM25),
        forecast_days,
        hourly,
    }
}
