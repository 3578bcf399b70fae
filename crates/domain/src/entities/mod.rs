//! Domain entities - the snapshot the engine reads and the plan it produces

mod render_plan;
mod weather_snapshot;

pub use render_plan::{ItemPlan, Progress, RenderPlan, Visibility};
pub(crate) use render_plan::RenderPlanBuilder;
pub use weather_snapshot::{FORECAST_DAYS, ForecastDay, HOURLY_ENTRIES, HourlyEntry, WeatherSnapshot};
