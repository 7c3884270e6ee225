//! JSON snapshots of the active and history lists.

use log::debug;

use super::KeyValueStore;
use crate::{error::Result, models::Quest};

pub const QUESTS_NAMESPACE: &str = "daily_quest_data";
pub const KEY_QUESTS: &str = "quests";
pub const KEY_HISTORY: &str = "history";

/// Reads and writes both quest lists under [`QUESTS_NAMESPACE`].
pub struct QuestStorage;

impl QuestStorage {
    /// Writes both lists as JSON arrays in one batch.
    pub fn save(store: &mut dyn KeyValueStore, active: &[Quest], history: &[Quest]) -> Result<()> {
        let active_json = serde_json::to_string(active)?;
        let history_json = serde_json::to_string(history)?;

        debug!(
            "Saving {} active and {} history quests",
            active.len(),
            history.len()
        );
        store.set_strings(
            QUESTS_NAMESPACE,
            &[(KEY_QUESTS, active_json.as_str()), (KEY_HISTORY, history_json.as_str())],
        )
    }

    /// Loads `(active, history)`. Missing or blank keys load as empty lists.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::Serialization` if a stored array is malformed.
    pub fn load(store: &dyn KeyValueStore) -> Result<(Vec<Quest>, Vec<Quest>)> {
        let active = Self::load_list(store, KEY_QUESTS)?;
        let history = Self::load_list(store, KEY_HISTORY)?;
        Ok((active, history))
    }

    fn load_list(store: &dyn KeyValueStore, key: &str) -> Result<Vec<Quest>> {
        match store.get_string(QUESTS_NAMESPACE, key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }
}
