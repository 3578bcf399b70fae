//! Color value object
//!
//! An opaque 24-bit RGB color, displayed and serialized as `#RRGGBB`.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Color;
//!
//! let green = Color::from_rgb(0x00, 0xE4, 0x00);
//! assert_eq!(green.to_string(), "#00E400");
//! assert_eq!("#00e400".parse::<Color>().expect("valid hex"), green);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a `#RRGGBB` string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0} (expected #RRGGBB)")]
pub struct InvalidColor(String);

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u32);

impl Color {
    /// Create a color from its red, green and blue channels
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| InvalidColor(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Color::from_rgb(0x8F, 0x3F, 0x97).to_string(), "#8F3F97");
        assert_eq!(Color::from_rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn parse_accepts_either_case() {
        let c: Color = "#ff7e00".parse().unwrap();
        assert_eq!(c, Color::from_rgb(0xFF, 0x7E, 0x00));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("FF7E00".parse::<Color>().is_err());
        assert!("#FF7E0".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
    }

    #[test]
    fn serde_uses_hex_string() {
        let c = Color::from_rgb(0xFF, 0xFF, 0x00);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FFFF00\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
