//! Data models for quests and settings.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use quest_core::models::{Quest, QuestStatus};
//!
//! let created = Timestamp::from_second(1_700_000_000).unwrap();
//! let quest = Quest::new(1, "Read for 30 minutes", created);
//! assert_eq!(quest.status, QuestStatus::Active);
//!
//! let done = quest.into_completed(Timestamp::from_second(1_700_001_800).unwrap());
//! assert_eq!(done.status, QuestStatus::Completed);
//! assert!(done.completed_at.is_some());
//! assert!(!done.is_running);
//! ```

pub mod quest;
pub mod settings;
pub mod status;

#[cfg(test)]
mod tests;

pub use quest::{Quest, DAY_MILLIS};
pub use settings::Settings;
pub use status::QuestStatus;
