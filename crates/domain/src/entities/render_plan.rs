//! Render plans
//!
//! A render plan is the complete output of one resolution call: what text,
//! icon, color, progress value and visibility each element gets. It is
//! built once by the assembler and never mutated; the rendering layer
//! applies it verbatim and discards it.
//!
//! All maps are ordered by [`ElementId`], so two plans built from the same
//! inputs serialize to identical bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{Color, ElementId, IconId, WidgetVariant};

/// Whether an element takes part in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Determinate progress bar state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    pub value: u32,
    pub max: u32,
}

/// One resolved row of a list element (forecast day or hourly entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlan {
    slot: u8,
    texts: BTreeMap<ElementId, String>,
    icons: BTreeMap<ElementId, IconId>,
}

impl ItemPlan {
    pub(crate) fn new(slot: u8) -> Self {
        Self {
            slot,
            texts: BTreeMap::new(),
            icons: BTreeMap::new(),
        }
    }

    pub(crate) fn text(mut self, element: ElementId, text: impl Into<String>) -> Self {
        self.texts.insert(element, text.into());
        self
    }

    pub(crate) fn icon(mut self, element: ElementId, icon: IconId) -> Self {
        self.icons.insert(element, icon);
        self
    }

    /// Source slot in the store (day 1..=5, hour 0..=4)
    #[must_use]
    pub const fn slot(&self) -> u8 {
        self.slot
    }

    #[must_use]
    pub fn text_of(&self, element: ElementId) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    #[must_use]
    pub fn icon_of(&self, element: ElementId) -> Option<IconId> {
        self.icons.get(&element).copied()
    }

    #[must_use]
    pub const fn texts(&self) -> &BTreeMap<ElementId, String> {
        &self.texts
    }

    #[must_use]
    pub const fn icons(&self) -> &BTreeMap<ElementId, IconId> {
        &self.icons
    }
}

/// Immutable output of one resolution call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Variant that produced the plan; `None` for the notification
    variant: Option<WidgetVariant>,
    texts: BTreeMap<ElementId, String>,
    icons: BTreeMap<ElementId, IconId>,
    colors: BTreeMap<ElementId, Color>,
    progress: BTreeMap<ElementId, Progress>,
    visibility: BTreeMap<ElementId, Visibility>,
    items: Vec<ItemPlan>,
}

impl RenderPlan {
    #[must_use]
    pub const fn variant(&self) -> Option<WidgetVariant> {
        self.variant
    }

    #[must_use]
    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    #[must_use]
    pub fn icon(&self, element: ElementId) -> Option<IconId> {
        self.icons.get(&element).copied()
    }

    #[must_use]
    pub fn color(&self, element: ElementId) -> Option<Color> {
        self.colors.get(&element).copied()
    }

    #[must_use]
    pub fn progress(&self, element: ElementId) -> Option<Progress> {
        self.progress.get(&element).copied()
    }

    /// Visibility of an element; elements the plan does not mention are shown
    #[must_use]
    pub fn visibility(&self, element: ElementId) -> Visibility {
        self.visibility.get(&element).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_shown(&self, element: ElementId) -> bool {
        self.visibility(element).is_shown()
    }

    #[must_use]
    pub const fn texts(&self) -> &BTreeMap<ElementId, String> {
        &self.texts
    }

    #[must_use]
    pub const fn icons(&self) -> &BTreeMap<ElementId, IconId> {
        &self.icons
    }

    #[must_use]
    pub const fn colors(&self) -> &BTreeMap<ElementId, Color> {
        &self.colors
    }

    #[must_use]
    pub const fn progresses(&self) -> &BTreeMap<ElementId, Progress> {
        &self.progress
    }

    #[must_use]
    pub const fn visibilities(&self) -> &BTreeMap<ElementId, Visibility> {
        &self.visibility
    }

    /// Resolved list rows, in slot order, with skipped slots omitted
    #[must_use]
    pub fn items(&self) -> &[ItemPlan] {
        &self.items
    }
}

/// Accumulates plan parts inside the assembler; only `build` escapes
#[derive(Debug, Default)]
pub(crate) struct RenderPlanBuilder {
    variant: Option<WidgetVariant>,
    texts: BTreeMap<ElementId, String>,
    icons: BTreeMap<ElementId, IconId>,
    colors: BTreeMap<ElementId, Color>,
    progress: BTreeMap<ElementId, Progress>,
    visibility: BTreeMap<ElementId, Visibility>,
    items: Vec<ItemPlan>,
}

impl RenderPlanBuilder {
    pub(crate) fn for_variant(variant: WidgetVariant) -> Self {
        Self {
            variant: Some(variant),
            ..Self::default()
        }
    }

    pub(crate) fn text(mut self, element: ElementId, text: impl Into<String>) -> Self {
        self.texts.insert(element, text.into());
        self
    }

    pub(crate) fn icon(mut self, element: ElementId, icon: IconId) -> Self {
        self.icons.insert(element, icon);
        self
    }

    pub(crate) fn color(mut self, element: ElementId, color: Color) -> Self {
        self.colors.insert(element, color);
        self
    }

    pub(crate) fn progress(mut self, element: ElementId, progress: Progress) -> Self {
        self.progress.insert(element, progress);
        self
    }

    pub(crate) fn visibility(mut self, visibility: BTreeMap<ElementId, Visibility>) -> Self {
        self.visibility = visibility;
        self
    }

    pub(crate) fn items(mut self, items: Vec<ItemPlan>) -> Self {
        self.items = items;
        self
    }

    pub(crate) fn build(self) -> RenderPlan {
        RenderPlan {
            variant: self.variant,
            texts: self.texts,
            icons: self.icons,
            colors: self.colors,
            progress: self.progress,
            visibility: self.visibility,
            items: self.items,
        }
    }
}
