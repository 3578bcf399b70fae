//! Widget render service
//!
//! Reads one snapshot from the store and resolves widget instances (and
//! the persistent notification) against it. Every instance in a batch sees
//! the same snapshot; nothing is cached between calls.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;
use domain::{
    RenderPlan, SizeConstraint, WeatherSnapshot, WidgetVariant, resolve, resolve_notification,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::SnapshotStorePort;

/// One placed widget as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Host-assigned instance identifier
    pub id: String,
    pub variant: WidgetVariant,
    #[serde(flatten)]
    pub constraint: SizeConstraint,
}

impl WidgetInstance {
    #[must_use]
    pub fn new(id: impl Into<String>, variant: WidgetVariant, constraint: SizeConstraint) -> Self {
        Self {
            id: id.into(),
            variant,
            constraint,
        }
    }
}

/// A resolved widget, ready for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedWidget {
    pub instance_id: String,
    pub plan: RenderPlan,
}

/// Resolves render plans from the current store contents
pub struct WidgetRenderService {
    store: Arc<dyn SnapshotStorePort>,
}

impl fmt::Debug for WidgetRenderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetRenderService")
            .field("store", &self.store.describe())
            .finish()
    }
}

impl WidgetRenderService {
    pub fn new(store: Arc<dyn SnapshotStorePort>) -> Self {
        Self { store }
    }

    async fn load_snapshot(&self) -> Result<WeatherSnapshot, ApplicationError> {
        self.store.load_snapshot().await.inspect_err(|e| {
            warn!(
                error = %e,
                retryable = e.is_retryable(),
                store = %self.store.describe(),
                "Failed to load weather snapshot"
            );
        })
    }

    /// Resolve a single widget
    #[instrument(skip(self), fields(store = %self.store.describe()))]
    pub async fn render(
        &self,
        variant: WidgetVariant,
        constraint: SizeConstraint,
    ) -> Result<RenderPlan, ApplicationError> {
        let snapshot = self.load_snapshot().await?;
        debug!(%variant, %constraint, "Resolving widget");
        Ok(resolve(variant, &snapshot, constraint))
    }

    /// Resolve every instance against a single snapshot read
    #[instrument(skip(self, instances), fields(count = instances.len()))]
    pub async fn render_instances(
        &self,
        instances: &[WidgetInstance],
    ) -> Result<Vec<RenderedWidget>, ApplicationError> {
        if instances.is_empty() {
            debug!("No widget instances to render");
            return Ok(Vec::new());
        }

        let snapshot = self.load_snapshot().await?;
        let rendered: Vec<RenderedWidget> = instances
            .iter()
            .map(|instance| {
                debug!(
                    id = %instance.id,
                    variant = %instance.variant,
                    constraint = %instance.constraint,
                    "Resolving widget instance"
                );
                RenderedWidget {
                    instance_id: instance.id.clone(),
                    plan: resolve(instance.variant, &snapshot, instance.constraint),
                }
            })
            .collect();

        info!(rendered = rendered.len(), "Widget instances resolved");
        Ok(rendered)
    }

    /// Resolve the persistent notification, stamped with `updated_at`
    #[instrument(skip(self))]
    pub async fn render_notification(
        &self,
        updated_at: NaiveTime,
    ) -> Result<RenderPlan, ApplicationError> {
        let snapshot = self.load_snapshot().await?;
        let plan = resolve_notification(&snapshot, updated_at);
        debug!(hourly = plan.items().len(), "Notification resolved");
        Ok(plan)
    }
}
