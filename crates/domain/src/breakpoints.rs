//! Breakpoint rules and the visibility resolver
//!
//! A rule pairs a size predicate with the elements it hides. Rules are not
//! a first-match chain: every rule is evaluated, and an element is hidden
//! as soon as any satisfied rule names it. Width and height predicates are
//! independent, so a narrow-but-tall widget and a wide-but-short widget
//! each lose only what their short axis dictates. An "A or B" condition is
//! two rules naming the same element.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::Visibility;
use crate::value_objects::{ElementId, SizeConstraint};

/// Size predicate of a breakpoint rule; thresholds are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "axis", content = "below")]
pub enum Predicate {
    /// `min_width < n`
    WidthBelow(u32),
    /// `min_height < n`
    HeightBelow(u32),
}

impl Predicate {
    #[must_use]
    pub const fn matches(self, constraint: SizeConstraint) -> bool {
        match self {
            Self::WidthBelow(n) => constraint.min_width < n,
            Self::HeightBelow(n) => constraint.min_height < n,
        }
    }
}

/// Hide `hides` whenever `predicate` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakpointRule {
    pub predicate: Predicate,
    pub hides: &'static [ElementId],
}

impl BreakpointRule {
    #[must_use]
    pub const fn hide_when(predicate: Predicate, hides: &'static [ElementId]) -> Self {
        Self { predicate, hides }
    }
}

/// Visibility of every element in `elements` under `constraint`
///
/// Elements no satisfied rule names stay shown.
#[must_use]
pub fn resolve_visibility(
    elements: &[ElementId],
    rules: &[BreakpointRule],
    constraint: SizeConstraint,
) -> BTreeMap<ElementId, Visibility> {
    let mut visibility: BTreeMap<ElementId, Visibility> = elements
        .iter()
        .map(|el| (*el, Visibility::Shown))
        .collect();

    for rule in rules.iter().filter(|r| r.predicate.matches(constraint)) {
        for el in rule.hides {
            visibility.insert(*el, Visibility::Hidden);
        }
    }

    visibility
}
