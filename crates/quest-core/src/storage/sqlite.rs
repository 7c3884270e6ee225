//! SQLite-backed key-value store.

use std::path::Path;

use jiff::Timestamp;
use log::trace;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE namespace = ?1 AND key = ?2";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Key-value store kept in a single SQLite table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl KeyValueStore for SqliteStore {
    fn get_string(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        trace!("Reading {namespace}/{key}");
        self.connection
            .query_row(SELECT_VALUE_SQL, params![namespace, key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn set_string(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.set_strings(namespace, &[(key, value)])
    }

    fn set_strings(&mut self, namespace: &str, entries: &[(&str, &str)]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        for (key, value) in entries {
            trace!("Writing {namespace}/{key} ({} bytes)", value.len());
            tx.execute(UPSERT_VALUE_SQL, params![namespace, key, value, &now])
                .db_context("Failed to write value")?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }
}
