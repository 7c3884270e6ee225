use std::{path::PathBuf, sync::Arc};

use jiff::Timestamp;
use quest_core::{ManualClock, QuestTracker, TrackerBuilder};
use tempfile::TempDir;

/// 2025-01-01 00:00:00 UTC
pub fn start_time() -> Timestamp {
    Timestamp::from_second(1_735_689_600).expect("valid timestamp")
}

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_quests.db");
    (temp_dir, db_path)
}

/// Opens a tracker on `db_path` driven by `clock`.
pub fn open_tracker(db_path: &PathBuf, clock: &Arc<ManualClock>) -> QuestTracker {
    TrackerBuilder::new()
        .with_database_path(Some(db_path))
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create tracker")
}
