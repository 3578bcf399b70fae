//! Weather icon identifiers

use serde::{Deserialize, Serialize};

/// Symbolic weather icon, serialized as the host drawable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IconId {
    /// Night-time icon, overrides the condition for "current" icons
    #[serde(rename = "ic_weather_night")]
    Night,
    /// Rain, drizzle and thunderstorms
    #[serde(rename = "ic_weather_rainy")]
    Rainy,
    /// Snow
    #[serde(rename = "ic_weather_snowy")]
    Snowy,
    /// Clouds, and the fallback for anything unrecognized
    #[serde(rename = "ic_weather_cloudy")]
    Cloudy,
    /// Clear sky
    #[serde(rename = "ic_weather_sunny")]
    Sunny,
}
