//! Domain layer for Prism widgets
//!
//! The view-model resolution engine: classification, breakpoint rules, the
//! variant registry and the assembler that turns a weather snapshot and a
//! host size constraint into a render plan. Everything here is pure; no
//! I/O, no clock, no logging.

pub mod assembler;
pub mod breakpoints;
pub mod classification;
pub mod entities;
pub mod errors;
pub mod registry;
pub mod value_objects;

pub use assembler::{AQI_PROGRESS_MAX, resolve, resolve_notification};
pub use breakpoints::{BreakpointRule, Predicate, resolve_visibility};
pub use classification::{color_for_aqi, forecast_icon_for, icon_for};
pub use entities::{
    FORECAST_DAYS, ForecastDay, HOURLY_ENTRIES, HourlyEntry, ItemPlan, Progress, RenderPlan,
    Visibility, WeatherSnapshot,
};
pub use errors::DomainError;
pub use registry::VariantSchema;
pub use value_objects::*;
