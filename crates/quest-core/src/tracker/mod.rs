//! The quest tracker: today's active quests plus the history list.
//!
//! [`QuestTracker`] owns both lists and every quest in them. Front ends drive
//! it with discrete actions (add, toggle, complete, fail, clear, settings)
//! and with [`QuestTracker::tick`] once per second. They read state through
//! shared snapshots and never hold mutable references into the lists.
//!
//! ```text
//! ┌─────────────────┐  actions   ┌─────────────────┐  save/load  ┌─────────────────┐
//! │   Front end     │───────────▶│  QuestTracker   │────────────▶│  KeyValueStore  │
//! │ (CLI, ticker)   │◀───────────│ active, history │             │ (SQLite/memory) │
//! └─────────────────┘ snapshots  └─────────────────┘             └─────────────────┘
//! ```
//!
//! Every discrete action persists both lists right after it changes them.
//! Ticks only touch memory; call [`QuestTracker::flush`] to save the time
//! they accumulated.
//!
//! # Example
//!
//! ```rust
//! use quest_core::{storage::MemoryStore, TrackerBuilder};
//!
//! # fn example() -> quest_core::Result<()> {
//! let mut tracker = TrackerBuilder::new()
//!     .with_store(Box::new(MemoryStore::new()))
//!     .build()?;
//!
//! let quest = tracker.add_quest("  Buy milk ")?.expect("title is not blank");
//! assert_eq!(quest.title, "Buy milk");
//!
//! tracker.toggle_timer(quest.id)?;
//! tracker.tick();
//! assert_eq!(tracker.get(quest.id).map(|q| q.elapsed_millis), Some(1_000));
//!
//! tracker.complete_quest(quest.id)?;
//! assert!(tracker.active().is_empty());
//! assert_eq!(tracker.history().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info};

pub mod builder;
pub mod list;


pub use builder::TrackerBuilder;
pub use list::QuestList;

use crate::{
    clock::Clock,
    error::Result,
    models::{Quest, Settings},
    storage::{KeyValueStore, QuestStorage, SettingsStorage},
};

/// Milliseconds added to each running quest per tick.
pub const TICK_MILLIS: u64 = 1_000;

/// Read-only view of the tracker at one point in time.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    pub active: Arc<Vec<Quest>>,
    pub history: Arc<Vec<Quest>>,
    pub settings: Settings,
    pub version: u64,
}

/// Owner of the active and history quest lists.
pub struct QuestTracker {
    active: QuestList,
    history: QuestList,
    settings: Settings,
    settings_version: u64,
    store: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl QuestTracker {
    pub(crate) fn new(
        store: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        settings: Settings,
        active: Vec<Quest>,
        history: Vec<Quest>,
    ) -> Self {
        Self {
            active: QuestList::from(active),
            history: QuestList::from(history),
            settings,
            settings_version: 0,
            store,
            clock,
        }
    }

    pub fn active(&self) -> &QuestList {
        &self.active
    }

    pub fn history(&self) -> &QuestList {
        &self.history
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Looks a quest up in either list.
    pub fn get(&self, id: u64) -> Option<&Quest> {
        self.active.get(id).or_else(|| self.history.get(id))
    }

    /// Increases whenever either list or the settings change.
    pub fn version(&self) -> u64 {
        self.active.version() + self.history.version() + self.settings_version
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            active: self.active.snapshot(),
            history: self.history.snapshot(),
            settings: self.settings,
            version: self.version(),
        }
    }

    /// Adds a new active quest at the front of today's list.
    ///
    /// Returns `None` without touching anything when `title` is blank.
    pub fn add_quest(&mut self, title: &str) -> Result<Option<Quest>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let now = self.clock.now();
        let quest = Quest::new(self.next_id(now), title, now);
        debug!("Adding quest {} '{}'", quest.id, quest.title);

        self.active.push_front(quest.clone());
        self.persist()?;
        Ok(Some(quest))
    }

    /// Starts or stops the timer of an active quest.
    pub fn toggle_timer(&mut self, id: u64) -> Result<Option<Quest>> {
        if !self.active.get(id).is_some_and(Quest::is_active) {
            return Ok(None);
        }
        let updated = self
            .active
            .update(id, |q| q.is_running = !q.is_running)
            .cloned();

        let Some(quest) = updated else {
            return Ok(None);
        };
        debug!("Quest {id} timer running: {}", quest.is_running);
        self.persist()?;
        Ok(Some(quest))
    }

    /// Marks an active quest completed and moves it to the front of history.
    pub fn complete_quest(&mut self, id: u64) -> Result<Option<Quest>> {
        let now = self.clock.now();
        self.finish(id, |q| q.into_completed(now))
    }

    /// Marks an active quest failed and moves it to the front of history.
    ///
    /// Like [`complete_quest`](Self::complete_quest), this only acts on
    /// quests whose status is still active.
    pub fn fail_quest(&mut self, id: u64) -> Result<Option<Quest>> {
        let now = self.clock.now();
        self.finish(id, |q| q.into_failed(now))
    }

    /// Fails every active quest at once.
    ///
    /// The moved quests share one `failed_at` and keep their relative order
    /// at the front of history. Nothing is persisted when no quest moved.
    pub fn clear_incomplete(&mut self) -> Result<Vec<Quest>> {
        let now = self.clock.now();
        let failed = self.fail_where(now, Quest::is_active);
        if !failed.is_empty() {
            debug!("Cleared {} incomplete quests", failed.len());
            self.persist()?;
        }
        Ok(failed)
    }

    /// Advances every running active quest by one second.
    ///
    /// Returns the number of quests advanced. Ticks are not persisted.
    pub fn tick(&mut self) -> usize {
        self.active.update_where(Quest::is_ticking, |q| {
            q.elapsed_millis = q.elapsed_millis.saturating_add(TICK_MILLIS);
        })
    }

    /// Replaces and saves the settings.
    ///
    /// When auto-fail is enabled the 24-hour sweep runs immediately; the
    /// swept quests are returned.
    pub fn update_settings(&mut self, settings: Settings) -> Result<Vec<Quest>> {
        debug!("Updating settings: {settings:?}");
        self.settings = settings;
        self.settings_version += 1;
        SettingsStorage::save(self.store.as_mut(), &self.settings)?;

        if self.settings.auto_fail_after_24h {
            self.auto_fail_expired_quests()
        } else {
            Ok(Vec::new())
        }
    }

    /// Saves both lists, including time gathered by ticks.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    /// Fails active quests that are at least 24 hours old.
    pub(crate) fn auto_fail_expired_quests(&mut self) -> Result<Vec<Quest>> {
        let now = self.clock.now();
        let expired = self.fail_where(now, |q| q.is_expired(now));
        if !expired.is_empty() {
            info!("Auto-failed {} quests older than 24h", expired.len());
            self.persist()?;
        }
        Ok(expired)
    }

    fn finish<F>(&mut self, id: u64, transition: F) -> Result<Option<Quest>>
    where
        F: FnOnce(Quest) -> Quest,
    {
        if !self.active.get(id).is_some_and(Quest::is_active) {
            return Ok(None);
        }
        let Some(quest) = self.active.remove(id) else {
            return Ok(None);
        };

        let finished = transition(quest);
        debug!("Quest {id} finished as {}", finished.status.as_str());
        self.history.push_front(finished.clone());
        self.persist()?;
        Ok(Some(finished))
    }

    fn fail_where<P>(&mut self, now: Timestamp, pred: P) -> Vec<Quest>
    where
        P: Fn(&Quest) -> bool,
    {
        let failed: Vec<Quest> = self
            .active
            .extract_where(pred)
            .into_iter()
            .map(|q| q.into_failed(now))
            .collect();
        self.history.prepend(failed.clone());
        failed
    }

    /// Next id: the creation millisecond, bumped past any id already issued.
    fn next_id(&self, now: Timestamp) -> u64 {
        let now_ms = u64::try_from(now.as_millisecond()).unwrap_or(0);
        let last = self.active.iter().chain(self.history.iter()).map(|q| q.id).max();
        match last {
            Some(last) if last >= now_ms => last.saturating_add(1),
            _ => now_ms,
        }
    }

    fn persist(&mut self) -> Result<()> {
        QuestStorage::save(
            self.store.as_mut(),
            self.active.as_slice(),
            self.history.as_slice(),
        )
    }
}
