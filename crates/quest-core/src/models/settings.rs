//! User settings.

use serde::{Deserialize, Serialize};

/// Tracker settings persisted under the settings namespace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Sweep active quests older than 24 hours into history as failed
    pub auto_fail_after_24h: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_fail_after_24h: true,
        }
    }
}
