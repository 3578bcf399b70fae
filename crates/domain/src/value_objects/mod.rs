//! Value Objects - Immutable, identity-less domain primitives

mod aqi_band;
mod color;
mod element_id;
mod icon_id;
mod size_constraint;
mod widget_variant;

pub use aqi_band::AqiBand;
pub use color::{Color, InvalidColor};
pub use element_id::ElementId;
pub use icon_id::IconId;
pub use size_constraint::SizeConstraint;
pub use widget_variant::WidgetVariant;
