//! Key-value persistence for quests and settings.
//!
//! The tracker never talks to a database directly. It goes through the
//! [`KeyValueStore`] trait, which models a small string/boolean store split
//! into namespaces. Two namespaces are used:
//!
//! | namespace              | key             | value                        |
//! |------------------------|-----------------|------------------------------|
//! | `daily_quest_data`     | `quests`        | JSON array of active quests  |
//! | `daily_quest_data`     | `history`       | JSON array of history quests |
//! | `daily_quest_settings` | `auto_fail_24h` | boolean                      |
//!
//! [`SqliteStore`] is the on-disk backend and [`MemoryStore`] keeps
//! everything in a map for tests and throwaway sessions.

use crate::error::{QuestError, Result};

pub mod memory;
pub mod quests;
pub mod settings;
pub mod sqlite;

pub use memory::MemoryStore;
pub use quests::QuestStorage;
pub use settings::SettingsStorage;
pub use sqlite::SqliteStore;

/// A namespaced string and boolean store.
pub trait KeyValueStore: Send {
    /// Reads a string value, `None` when the key was never written.
    fn get_string(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Writes a string value, replacing any previous one.
    fn set_string(&mut self, namespace: &str, key: &str, value: &str) -> Result<()>;

    /// Writes several string values together.
    ///
    /// Backends that support transactions override this so either every
    /// entry lands or none does.
    fn set_strings(&mut self, namespace: &str, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set_string(namespace, key, value)?;
        }
        Ok(())
    }

    /// Reads a boolean value, `None` when the key was never written.
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>> {
        self.get_string(namespace, key)?
            .map(|raw| match raw.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(QuestError::Configuration {
                    message: format!("Invalid boolean '{other}' for key '{namespace}/{key}'"),
                }),
            })
            .transpose()
    }

    /// Writes a boolean value.
    fn set_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<()> {
        self.set_string(namespace, key, if value { "true" } else { "false" })
    }
}
