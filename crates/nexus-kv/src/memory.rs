//! Ephemeral in-memory key-value backend.

use crate::store::{KeyValueStore, validate_key};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Key-value area held entirely in process memory.
///
/// Data is **lost when the value is dropped**. Useful for tests and for dry
/// runs where nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a value.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    /// Returns `true` if no slot holds a value.
    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn get_missing_slot_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(!store.contains("missing").await.unwrap());
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = MemoryStore::new();
        store.set("slot", "value").await.unwrap();

        assert_eq!(store.get("slot").await.unwrap().as_deref(), Some("value"));
        assert!(store.contains("slot").await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("slot", "first").await.unwrap();
        store.set("slot", "second").await.unwrap();

        assert_eq!(store.get("slot").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn empty_value_is_distinct_from_missing() {
        let store = MemoryStore::new();
        store.set("slot", "").await.unwrap();

        assert_eq!(store.get("slot").await.unwrap().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("slot", "value").await.unwrap();

        store.remove("slot").await.unwrap();
        store.remove("slot").await.unwrap();

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn invalid_key_is_rejected() {
        let store = MemoryStore::new();
        let err = store.set("../escape", "x").await.unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));
    }
}
