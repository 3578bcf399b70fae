//! Condition and AQI classification
//!
//! Maps free-text conditions to icons and AQI values to colors. Condition
//! matching is plain substring search on the lower-cased text, checked in a
//! fixed priority order; the first hit wins and anything unrecognized is
//! cloudy.

use crate::value_objects::{AqiBand, Color, IconId};

/// Substring groups in priority order
const CONDITION_RULES: &[(&[&str], IconId)] = &[
    (&["rain", "drizzle", "thunder"], IconId::Rainy),
    (&["snow"], IconId::Snowy),
    (&["cloud"], IconId::Cloudy),
    (&["clear", "sunny"], IconId::Sunny),
];

/// Icon for a "current" condition
///
/// Night overrides the condition text entirely.
#[must_use]
pub fn icon_for(condition: &str, is_night: bool) -> IconId {
    if is_night {
        return IconId::Night;
    }
    let lowered = condition.to_lowercase();
    CONDITION_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map_or(IconId::Cloudy, |(_, icon)| *icon)
}

/// Icon for a future forecast day; never uses the night icon
#[must_use]
pub fn forecast_icon_for(condition: &str) -> IconId {
    icon_for(condition, false)
}

/// Band color for an AQI value
#[must_use]
pub const fn color_for_aqi(aqi: i64) -> Color {
    AqiBand::from_aqi(aqi).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color = Color::from_rgb(0x00, 0xE4, 0x00);
    const YELLOW: Color = Color::from_rgb(0xFF, 0xFF, 0x00);
    const ORANGE: Color = Color::from_rgb(0xFF, 0x7E, 0x00);
    const RED: Color = Color::from_rgb(0xFF, 0x00, 0x00);
    const PURPLE: Color = Color::from_rgb(0x8F, 0x3F, 0x97);
    const MAROON: Color = Color::from_rgb(0x7E, 0x00, 0x23);

    #[test]
    fn aqi_boundaries() {
        assert_eq!(color_for_aqi(50), GREEN);
        assert_eq!(color_for_aqi(51), YELLOW);
        assert_eq!(color_for_aqi(100), YELLOW);
        assert_eq!(color_for_aqi(101), ORANGE);
        assert_eq!(color_for_aqi(150), ORANGE);
        assert_eq!(color_for_aqi(151), RED);
        assert_eq!(color_for_aqi(200), RED);
        assert_eq!(color_for_aqi(201), PURPLE);
        assert_eq!(color_for_aqi(300), PURPLE);
        assert_eq!(color_for_aqi(301), MAROON);
    }

    #[test]
    fn missing_aqi_is_green() {
        assert_eq!(color_for_aqi(0), GREEN);
    }

    #[test]
    fn rain_beats_cloud() {
        assert_eq!(icon_for("light rain and cloud", false), IconId::Rainy);
    }

    #[test]
    fn thunder_is_rainy() {
        assert_eq!(icon_for("Thunderstorm", false), IconId::Rainy);
        assert_eq!(icon_for("drizzle", false), IconId::Rainy);
    }

    #[test]
    fn snow_beats_cloud() {
        assert_eq!(icon_for("snow clouds", false), IconId::Snowy);
    }

    #[test]
    fn cloud_beats_clear() {
        assert_eq!(icon_for("partly cloudy, clearing", false), IconId::Cloudy);
    }

    #[test]
    fn clear_and_sunny() {
        assert_eq!(icon_for("Clear", false), IconId::Sunny);
        assert_eq!(icon_for("SUNNY", false), IconId::Sunny);
    }

    #[test]
    fn unknown_and_empty_default_to_cloudy() {
        assert_eq!(icon_for("", false), IconId::Cloudy);
        assert_eq!(icon_for("Unknown", false), IconId::Cloudy);
        assert_eq!(icon_for("fog", false), IconId::Cloudy);
    }

    #[test]
    fn night_overrides_everything() {
        assert_eq!(icon_for("anything", true), IconId::Night);
        assert_eq!(icon_for("sunny", true), IconId::Night);
        assert_eq!(icon_for("", true), IconId::Night);
    }

    #[test]
    fn forecast_never_night() {
        assert_eq!(forecast_icon_for("clear"), IconId::Sunny);
        assert_eq!(forecast_icon_for("unknown"), IconId::Cloudy);
    }
}
