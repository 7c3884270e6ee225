//! Settings persistence.

use super::KeyValueStore;
use crate::{error::Result, models::Settings};

pub const SETTINGS_NAMESPACE: &str = "daily_quest_settings";
pub const KEY_AUTO_FAIL: &str = "auto_fail_24h";

/// Reads and writes [`Settings`] under [`SETTINGS_NAMESPACE`].
pub struct SettingsStorage;

impl SettingsStorage {
    /// Loads settings, falling back to defaults for absent keys.
    pub fn load(store: &dyn KeyValueStore) -> Result<Settings> {
        let defaults = Settings::default();
        let auto_fail_after_24h = store
            .get_bool(SETTINGS_NAMESPACE, KEY_AUTO_FAIL)?
            .unwrap_or(defaults.auto_fail_after_24h);

        Ok(Settings {
            auto_fail_after_24h,
        })
    }

    pub fn save(store: &mut dyn KeyValueStore, settings: &Settings) -> Result<()> {
        store.set_bool(SETTINGS_NAMESPACE, KEY_AUTO_FAIL, settings.auto_fail_after_24h)
    }
}
