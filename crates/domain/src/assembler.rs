//! View-model assembler
//!
//! [`resolve`] turns a variant, a snapshot and a size constraint into a
//! complete [`RenderPlan`]; [`resolve_notification`] does the same for the
//! persistent notification. Both are pure: no I/O, no clock, no shared
//! state. Missing or blank fields fall back to per-slot defaults, so
//! assembly always succeeds.

use chrono::NaiveTime;

use crate::breakpoints::resolve_visibility;
use crate::classification::{color_for_aqi, forecast_icon_for, icon_for};
use crate::entities::{
    FORECAST_DAYS, HOURLY_ENTRIES, ItemPlan, Progress, RenderPlan, RenderPlanBuilder,
    WeatherSnapshot,
};
use crate::registry::{self, NOTIFICATION_ELEMENTS};
use crate::value_objects::{ElementId, SizeConstraint, WidgetVariant};

/// Upper bound of the AQI progress bar
pub const AQI_PROGRESS_MAX: u32 = 300;

const PLACEHOLDER: &str = "--";
const UNKNOWN: &str = "Unknown";
const DEFAULT_PM25: &str = "0";
const DEFAULT_SUNRISE: &str = "06:00";
const DEFAULT_SUNSET: &str = "18:00";
const DEFAULT_DAY_TEMP: &str = "--°/--°";
const DEFAULT_DAY_CONDITION: &str = "unknown";
const DEFAULT_NOTIFICATION_LOCATION: &str = "Location";
const DEFAULT_HIGH_LOW: &str = "--/--";
const DEFAULT_HOURLY_CONDITION: &str = "cloud";

/// Field value, or `default` when absent or blank
fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

/// Field value when present and non-blank
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn degrees(value: &str) -> String {
    format!("{value}°")
}

/// Resolve the render plan for one widget instance
#[must_use]
pub fn resolve(
    variant: WidgetVariant,
    snapshot: &WeatherSnapshot,
    constraint: SizeConstraint,
) -> RenderPlan {
    let schema = registry::schema(variant);
    let builder = RenderPlanBuilder::for_variant(variant);

    let builder = match variant {
        WidgetVariant::AqiCompact => aqi_compact(builder, snapshot),
        WidgetVariant::ForecastRow => forecast_row(builder, snapshot),
        WidgetVariant::SunPath => sun_path(builder, snapshot),
        WidgetVariant::WeatherSmall => current_weather(builder, snapshot),
        WidgetVariant::WeatherMedium => weather_medium(builder, snapshot),
        WidgetVariant::Wind => builder.text(
            ElementId::WindSpeed,
            or_default(snapshot.wind_speed.as_deref(), PLACEHOLDER),
        ),
    };

    builder
        .visibility(resolve_visibility(schema.elements, schema.rules, constraint))
        .build()
}

/// Resolve the persistent notification
///
/// `updated_at` is the wall-clock time shown as "Updated HH:MM"; the caller
/// reads the clock so the engine stays deterministic.
#[must_use]
pub fn resolve_notification(snapshot: &WeatherSnapshot, updated_at: NaiveTime) -> RenderPlan {
    let condition = or_default(snapshot.condition.as_deref(), UNKNOWN);
    let high_low = or_default(
        snapshot.forecast_days.first().and_then(|d| d.temp.as_deref()),
        DEFAULT_HIGH_LOW,
    );

    RenderPlanBuilder::default()
        .text(
            ElementId::Temperature,
            degrees(or_default(snapshot.temperature.as_deref(), PLACEHOLDER)),
        )
        .text(
            ElementId::Location,
            or_default(snapshot.location.as_deref(), DEFAULT_NOTIFICATION_LOCATION),
        )
        .text(ElementId::Condition, condition)
        .text(ElementId::HighLow, format!("H/L: {high_low}"))
        .text(
            ElementId::Updated,
            format!("Updated {}", updated_at.format("%H:%M")),
        )
        .icon(ElementId::WeatherIcon, icon_for(condition, snapshot.is_night()))
        .items(hourly_items(snapshot))
        .visibility(resolve_visibility(NOTIFICATION_ELEMENTS, &[], SizeConstraint::default()))
        .build()
}

fn aqi_compact(builder: RenderPlanBuilder, snapshot: &WeatherSnapshot) -> RenderPlanBuilder {
    let aqi = snapshot.aqi_value.unwrap_or(0);
    let description = or_default(snapshot.aqi_description.as_deref(), PLACEHOLDER);
    let pm25 = or_default(snapshot.pm25.as_deref(), DEFAULT_PM25);
    let progress = u32::try_from(aqi.clamp(0, i64::from(AQI_PROGRESS_MAX))).unwrap_or(0);

    builder
        .text(ElementId::AqiValue, aqi.to_string())
        .text(ElementId::AqiDescription, description.to_uppercase())
        .text(ElementId::AqiPm25, format!("PM2.5: {pm25}"))
        .color(ElementId::AqiDescription, color_for_aqi(aqi))
        .progress(
            ElementId::AqiProgress,
            Progress {
                value: progress,
                max: AQI_PROGRESS_MAX,
            },
        )
}

fn sun_path(builder: RenderPlanBuilder, snapshot: &WeatherSnapshot) -> RenderPlanBuilder {
    builder
        .text(
            ElementId::Sunrise,
            or_default(snapshot.sunrise.as_deref(), DEFAULT_SUNRISE),
        )
        .text(
            ElementId::Sunset,
            or_default(snapshot.sunset.as_deref(), DEFAULT_SUNSET),
        )
}

/// Temperature, location and icon shared by both weather layouts
fn current_weather(builder: RenderPlanBuilder, snapshot: &WeatherSnapshot) -> RenderPlanBuilder {
    let condition = or_default(snapshot.condition.as_deref(), UNKNOWN);
    builder
        .text(
            ElementId::Temperature,
            degrees(or_default(snapshot.temperature.as_deref(), PLACEHOLDER)),
        )
        .text(
            ElementId::Location,
            or_default(snapshot.location.as_deref(), UNKNOWN),
        )
        .icon(ElementId::WeatherIcon, icon_for(condition, snapshot.is_night()))
}

fn weather_medium(builder: RenderPlanBuilder, snapshot: &WeatherSnapshot) -> RenderPlanBuilder {
    let feels_like = or_default(snapshot.feels_like.as_deref(), PLACEHOLDER);
    let humidity = or_default(snapshot.humidity.as_deref(), PLACEHOLDER);
    current_weather(builder, snapshot)
        .text(
            ElementId::Condition,
            or_default(snapshot.condition.as_deref(), UNKNOWN),
        )
        .text(ElementId::FeelsLike, format!("Feels {feels_like}°"))
        .text(ElementId::Humidity, format!("{humidity}%"))
}

fn forecast_row(builder: RenderPlanBuilder, snapshot: &WeatherSnapshot) -> RenderPlanBuilder {
    let items = snapshot
        .forecast_days
        .iter()
        .take(FORECAST_DAYS)
        .zip(1u8..)
        .filter_map(|(day, slot)| {
            let name = present(day.name.as_deref())?;
            let condition = or_default(day.condition.as_deref(), DEFAULT_DAY_CONDITION);
            Some(
                ItemPlan::new(slot)
                    .text(ElementId::DayName, name.to_uppercase())
                    .text(
                        ElementId::DayTemp,
                        or_default(day.temp.as_deref(), DEFAULT_DAY_TEMP),
                    )
                    .icon(ElementId::DayIcon, forecast_icon_for(condition)),
            )
        })
        .collect();

    builder
        .text(
            ElementId::Location,
            or_default(snapshot.location.as_deref(), UNKNOWN),
        )
        .items(items)
}

fn hourly_items(snapshot: &WeatherSnapshot) -> Vec<ItemPlan> {
    let is_night = snapshot.is_night();
    snapshot
        .hourly
        .iter()
        .take(HOURLY_ENTRIES)
        .zip(0u8..)
        .filter_map(|(hour, slot)| {
            let time = present(hour.time.as_deref())?;
            let condition = or_default(hour.condition.as_deref(), DEFAULT_HOURLY_CONDITION);
            Some(
                ItemPlan::new(slot)
                    .text(ElementId::HourlyTime, time)
                    .text(
                        ElementId::HourlyTemp,
                        or_default(hour.temp.as_deref(), PLACEHOLDER),
                    )
                    .icon(ElementId::HourlyIcon, icon_for(condition, is_night)),
            )
        })
        .collect()
}
