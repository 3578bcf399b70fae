//! Host-reported widget size
//!
//! Hosts report the minimum bounding box of a widget instance in
//! device-independent units. A host that has not reported options yet
//! reports zero on both axes, which is a valid (very small) constraint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum bounding box of one widget instance, in dp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizeConstraint {
    /// Minimum width in dp
    pub min_width: u32,
    /// Minimum height in dp
    pub min_height: u32,
}

impl SizeConstraint {
    /// Create a new size constraint
    #[must_use]
    pub const fn new(min_width: u32, min_height: u32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}dp", self.min_width, self.min_height)
    }
}
