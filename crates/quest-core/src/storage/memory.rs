//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// Store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written across all namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn set_string(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.entries
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_round_trip_uses_text_values() {
        let mut store = MemoryStore::new();
        store.set_bool("settings", "flag", true).unwrap();

        assert_eq!(store.get_bool("settings", "flag").unwrap(), Some(true));
        assert_eq!(
            store.get_string("settings", "flag").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.len(), 1);
    }
}
