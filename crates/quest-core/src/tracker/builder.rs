//! Builder for creating and configuring QuestTracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, info};

use super::QuestTracker;
use crate::{
    clock::{Clock, SystemClock},
    error::{QuestError, Result},
    storage::{KeyValueStore, QuestStorage, SettingsStorage, SqliteStore},
};

/// Builder for creating and configuring QuestTracker instances.
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Box<dyn KeyValueStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            store: None,
            clock: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/daily-quest/quests.db` or
    /// `~/.local/share/daily-quest/quests.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already opened store instead of a database file.
    ///
    /// Takes precedence over [`with_database_path`](Self::with_database_path).
    pub fn with_store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Overrides the system clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Opens the store, loads settings and quests, and runs the 24-hour sweep
    /// when auto-fail is enabled.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::FileSystem` if the database directory cannot be created
    /// Returns `QuestError::Database` if the store cannot be opened
    /// Returns `QuestError::Serialization` if persisted quests are malformed
    pub fn build(self) -> Result<QuestTracker> {
        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Box::new(Self::open_database(self.database_path)?),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let settings = SettingsStorage::load(store.as_ref())?;
        let (active, history) = QuestStorage::load(store.as_ref())?;
        debug!(
            "Loaded {} active and {} history quests",
            active.len(),
            history.len()
        );

        let mut tracker = QuestTracker::new(store, clock, settings, active, history);
        if settings.auto_fail_after_24h {
            let expired = tracker.auto_fail_expired_quests()?;
            if !expired.is_empty() {
                info!("{} quests expired since the last session", expired.len());
            }
        }

        Ok(tracker)
    }

    fn open_database(path: Option<PathBuf>) -> Result<SqliteStore> {
        let db_path = match path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| QuestError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening quest database at {}", db_path.display());
        SqliteStore::open(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("daily-quest")
            .place_data_file("quests.db")
            .map_err(|e| QuestError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
