//! Core library for the daily quest tracker.
//!
//! A quest is a small task for today. While active it can be timed, and it
//! ends up in the history list as either completed or failed. This crate
//! owns that state model, its persistence and the one-second timer.
//!
//! - [`models`]: quest and settings records
//! - [`tracker`]: the [`QuestTracker`] and its builder
//! - [`storage`]: the key-value store trait and its SQLite/in-memory backends
//! - [`ticker`]: cancellable periodic ticks for the timer
//! - [`display`]: markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use quest_core::TrackerBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut tracker = TrackerBuilder::new()
//!     .with_database_path(Some(dir.path().join("quests.db")))
//!     .build()?;
//!
//! if let Some(quest) = tracker.add_quest("Study Rust for 30 minutes")? {
//!     println!("{quest}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod ticker;
pub mod tracker;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{ActiveQuests, Elapsed, LocalDateTime, OperationStatus, QuestHistory};
pub use error::{QuestError, Result};
pub use models::{Quest, QuestStatus, Settings};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use ticker::{Tick, Ticker, TICK_PERIOD};
pub use tracker::{QuestTracker, TrackerBuilder, TrackerSnapshot};
