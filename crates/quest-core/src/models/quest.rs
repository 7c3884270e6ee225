//! Quest model definition and its state transitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::QuestStatus;

/// Age at which an active quest is swept into history as failed.
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// A single quest record.
///
/// The persisted field names and the epoch-millisecond timestamps match the
/// JSON layout stored under the quests namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Unique identifier, increasing with creation time
    pub id: u64,

    /// Trimmed, non-empty title
    pub title: String,

    /// When the quest was added
    #[serde(with = "epoch_millis")]
    pub created_at: Timestamp,

    /// Time tracked so far, in milliseconds
    pub elapsed_millis: u64,

    /// Whether the timer is currently counting
    pub is_running: bool,

    /// Current status of the quest
    pub status: QuestStatus,

    /// Set iff status = Completed
    #[serde(default, with = "epoch_millis::option")]
    pub completed_at: Option<Timestamp>,

    /// Set iff status = Failed
    #[serde(default, with = "epoch_millis::option")]
    pub failed_at: Option<Timestamp>,
}

impl Quest {
    /// Creates a fresh active quest with no tracked time.
    pub fn new(id: u64, title: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            title: title.into(),
            created_at,
            elapsed_millis: 0,
            is_running: false,
            status: QuestStatus::Active,
            completed_at: None,
            failed_at: None,
        }
    }

    /// Whether the quest is still on today's list.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether the timer should advance on the next tick.
    pub fn is_ticking(&self) -> bool {
        self.is_running && self.is_active()
    }

    /// Whether an active quest is at least a day old at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.is_active() && now.as_millisecond() - self.created_at.as_millisecond() >= DAY_MILLIS
    }

    /// Terminal record for a completed quest.
    pub fn into_completed(self, now: Timestamp) -> Self {
        Self {
            status: QuestStatus::Completed,
            is_running: false,
            completed_at: Some(now),
            failed_at: None,
            ..self
        }
    }

    /// Terminal record for a failed quest.
    pub fn into_failed(self, now: Timestamp) -> Self {
        Self {
            status: QuestStatus::Failed,
            is_running: false,
            completed_at: None,
            failed_at: Some(now),
            ..self
        }
    }

    /// The instant the quest left the active list, if it has.
    pub fn finished_at(&self) -> Option<Timestamp> {
        match self.status {
            QuestStatus::Active => None,
            QuestStatus::Completed => self.completed_at,
            QuestStatus::Failed => self.failed_at,
        }
    }
}

/// Serde adapter storing timestamps as integer epoch milliseconds.
mod epoch_millis {
    use jiff::Timestamp;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ts.as_millisecond())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Timestamp::from_millisecond(millis).map_err(D::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            ts: &Option<Timestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => serializer.serialize_some(&ts.as_millisecond()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Timestamp>, D::Error> {
            Option::<i64>::deserialize(deserializer)?
                .map(Timestamp::from_millisecond)
                .transpose()
                .map_err(D::Error::custom)
        }
    }
}
