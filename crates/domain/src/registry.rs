//! Variant registry
//!
//! Static description of every widget kind: its host layout, the elements
//! it owns, and its breakpoint table. The notification and the list-item
//! layouts are described here too so that every element the assembler
//! writes belongs to a known schema.

use serde::Serialize;

use crate::breakpoints::{BreakpointRule, Predicate};
use crate::value_objects::{ElementId, WidgetVariant};

/// Schema of one widget variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantSchema {
    pub variant: WidgetVariant,
    /// Host layout resource name
    pub layout: &'static str,
    pub elements: &'static [ElementId],
    pub rules: &'static [BreakpointRule],
    /// Elements of each list row, empty for variants without a list
    pub item_elements: &'static [ElementId],
}

/// AQI details group: description and PM2.5 hide together with their row
const AQI_DETAILS_GROUP: &[ElementId] = &[
    ElementId::AqiDetails,
    ElementId::AqiDescription,
    ElementId::AqiPm25,
];

const SUNRISE_GROUP: &[ElementId] = &[ElementId::SunriseLayout, ElementId::Sunrise];

/// Feels-like and humidity row of the medium weather widget
const WEATHER_DETAILS_GROUP: &[ElementId] = &[
    ElementId::WeatherDetails,
    ElementId::FeelsLike,
    ElementId::Humidity,
];

static AQI_COMPACT: VariantSchema = VariantSchema {
    variant: WidgetVariant::AqiCompact,
    layout: "widget_aqi",
    elements: &[
        ElementId::AqiValue,
        ElementId::AqiDescription,
        ElementId::AqiPm25,
        ElementId::AqiProgress,
        ElementId::AqiDetails,
    ],
    rules: &[
        BreakpointRule::hide_when(Predicate::HeightBelow(80), &[ElementId::AqiProgress]),
        BreakpointRule::hide_when(Predicate::WidthBelow(100), AQI_DETAILS_GROUP),
        BreakpointRule::hide_when(Predicate::HeightBelow(60), AQI_DETAILS_GROUP),
    ],
    item_elements: &[],
};

static FORECAST_ROW: VariantSchema = VariantSchema {
    variant: WidgetVariant::ForecastRow,
    layout: "widget_forecast",
    elements: &[ElementId::Location, ElementId::ForecastDays],
    rules: &[],
    item_elements: FORECAST_ITEM_ELEMENTS,
};

static SUN_PATH: VariantSchema = VariantSchema {
    variant: WidgetVariant::SunPath,
    layout: "widget_sun_path",
    elements: &[
        ElementId::SunIcon,
        ElementId::SunriseLayout,
        ElementId::Sunrise,
        ElementId::Sunset,
    ],
    rules: &[
        BreakpointRule::hide_when(Predicate::WidthBelow(110), &[ElementId::SunIcon]),
        BreakpointRule::hide_when(Predicate::WidthBelow(70), SUNRISE_GROUP),
    ],
    item_elements: &[],
};

static WEATHER_SMALL: VariantSchema = VariantSchema {
    variant: WidgetVariant::WeatherSmall,
    layout: "weather_widget_small",
    elements: &[
        ElementId::Temperature,
        ElementId::Location,
        ElementId::WeatherIcon,
    ],
    rules: &[],
    item_elements: &[],
};

static WEATHER_MEDIUM: VariantSchema = VariantSchema {
    variant: WidgetVariant::WeatherMedium,
    layout: "weather_widget_medium",
    elements: &[
        ElementId::Temperature,
        ElementId::Location,
        ElementId::Condition,
        ElementId::WeatherIcon,
        ElementId::FeelsLike,
        ElementId::Humidity,
        ElementId::WeatherDetails,
    ],
    rules: &[
        BreakpointRule::hide_when(Predicate::HeightBelow(110), WEATHER_DETAILS_GROUP),
        BreakpointRule::hide_when(Predicate::WidthBelow(140), &[ElementId::Condition]),
    ],
    item_elements: &[],
};

static WIND: VariantSchema = VariantSchema {
    variant: WidgetVariant::Wind,
    layout: "widget_wind",
    elements: &[ElementId::WindSpeed],
    rules: &[],
    item_elements: &[],
};

/// Elements of one forecast-day row
pub const FORECAST_ITEM_ELEMENTS: &[ElementId] =
    &[ElementId::DayName, ElementId::DayTemp, ElementId::DayIcon];

/// Elements of one notification hourly row
pub const HOURLY_ITEM_ELEMENTS: &[ElementId] = &[
    ElementId::HourlyTime,
    ElementId::HourlyTemp,
    ElementId::HourlyIcon,
];

/// Elements of the persistent notification; it has no breakpoints
pub const NOTIFICATION_ELEMENTS: &[ElementId] = &[
    ElementId::Temperature,
    ElementId::Location,
    ElementId::Condition,
    ElementId::HighLow,
    ElementId::Updated,
    ElementId::WeatherIcon,
    ElementId::HourlyForecast,
];

/// Schema for a variant
#[must_use]
pub fn schema(variant: WidgetVariant) -> &'static VariantSchema {
    match variant {
        WidgetVariant::AqiCompact => &AQI_COMPACT,
        WidgetVariant::ForecastRow => &FORECAST_ROW,
        WidgetVariant::SunPath => &SUN_PATH,
        WidgetVariant::WeatherSmall => &WEATHER_SMALL,
        WidgetVariant::WeatherMedium => &WEATHER_MEDIUM,
        WidgetVariant::Wind => &WIND,
    }
}

/// Every schema, in registry order
pub fn schemas() -> impl Iterator<Item = &'static VariantSchema> {
    WidgetVariant::all().into_iter().map(schema)
}
