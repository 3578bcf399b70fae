//! Application services - Use case implementations

mod widget_render_service;

pub use widget_render_service::{RenderedWidget, WidgetInstance, WidgetRenderService};
