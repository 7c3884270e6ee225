//! Error types for the quest tracker library.
//!
//! Domain operations never fail: an unknown quest id or a quest in the wrong
//! state is a silent no-op. Everything below comes from the storage layer or
//! from setting that layer up.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all tracker and storage operations.
#[derive(Error, Debug)]
pub enum QuestError {
    /// SQLite failed to open, migrate, read or write
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The database directory could not be created
    #[error("Cannot create '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No XDG data directory to place the default database in
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Persisted quest data could not be encoded or decoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A stored setting has an unexpected value
    #[error("Invalid setting: {message}")]
    Configuration { message: String },
}

/// Attaches a message to SQLite errors.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| QuestError::Database {
            message: message.to_owned(),
            source,
        })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to read key").unwrap_err();

        assert!(matches!(err, QuestError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to read key");
    }

    #[test]
    fn test_serialization_from_serde() {
        let source = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        let err: QuestError = source.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
