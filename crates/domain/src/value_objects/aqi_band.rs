//! AQI severity bands
//!
//! US EPA style bands with inclusive upper bounds. Anything at or below
//! 50 (including negative garbage) is `Good`; anything above 300 is
//! `Hazardous`.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::AqiBand;
//!
//! assert_eq!(AqiBand::from_aqi(50), AqiBand::Good);
//! assert_eq!(AqiBand::from_aqi(51), AqiBand::Moderate);
//! assert_eq!(AqiBand::from_aqi(301).color().to_string(), "#7E0023");
//! ```

use serde::{Deserialize, Serialize};

use super::Color;

/// Air quality severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiBand {
    /// 0-50, green
    Good,
    /// 51-100, yellow
    Moderate,
    /// 101-150, orange
    UnhealthyForSensitive,
    /// 151-200, red
    Unhealthy,
    /// 201-300, purple
    VeryUnhealthy,
    /// above 300, maroon
    Hazardous,
}

impl AqiBand {
    /// Classify a raw AQI value
    #[must_use]
    pub const fn from_aqi(aqi: i64) -> Self {
        match aqi {
            i64::MIN..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitive,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Display color of the band
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Good => Color::from_rgb(0x00, 0xE4, 0x00),
            Self::Moderate => Color::from_rgb(0xFF, 0xFF, 0x00),
            Self::UnhealthyForSensitive => Color::from_rgb(0xFF, 0x7E, 0x00),
            Self::Unhealthy => Color::from_rgb(0xFF, 0x00, 0x00),
            Self::VeryUnhealthy => Color::from_rgb(0x8F, 0x3F, 0x97),
            Self::Hazardous => Color::from_rgb(0x7E, 0x00, 0x23),
        }
    }
}
