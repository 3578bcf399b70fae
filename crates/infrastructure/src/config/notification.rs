//! Persistent notification settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Persistent notification toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether `render-all` also resolves the notification
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
