//! Issue persistence for nexus.
//!
//! The whole issue collection lives in a single slot of a
//! [`KeyValueStore`], serialized as one JSON array. Every read loads the
//! full collection and every write replaces it, so the slot is always the
//! single source of truth.
//!
//! # Architecture
//!
//! [`RecordStore`] holds an injected `Arc<dyn KeyValueStore>` handle rather
//! than reaching for a process-wide singleton. Tests pass a
//! [`MemoryStore`](nexus_kv::MemoryStore); the CLI passes a
//! [`FileStore`](nexus_kv::FileStore) rooted in `.nexus/data`. Several
//! independent record stores may share one key-value area as long as they use
//! different slot keys.
//!
//! # Seeding
//!
//! The first time a slot is read it is empty. [`RecordStore::initialize_if_absent`]
//! is the explicit step that writes the seed dataset in that case; `load()`
//! calls it only when the slot is missing. Once any collection has been
//! written (even an empty one) the seed is never written again.
//!
//! # Example
//!
//! ```no_run
//! use nexus::storage::RecordStore;
//! use nexus_kv::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let store = RecordStore::new(Arc::new(MemoryStore::new()));
//!
//!     let issues = store.load().await?;
//!     assert_eq!(issues.len(), 2);
//!
//!     store.save(&[]).await?;
//!     assert!(store.load().await?.is_empty());
//!     Ok(())
//! }
//! ```

mod seed;

pub use seed::seed_issues;

use crate::domain::Issue;
use crate::error::{Error, Result};
use chrono::Utc;
use nexus_kv::KeyValueStore;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Slot key used when none is configured
pub const DEFAULT_SLOT_KEY: &str = "nexus_issues_db_v1";

/// Durable storage of the full issue collection in one key-value slot.
#[derive(Clone)]
pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("key", &self.key)
            .field("kv", &"<dyn KeyValueStore>")
            .finish()
    }
}

impl RecordStore {
    /// Create a record store using [`DEFAULT_SLOT_KEY`].
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, DEFAULT_SLOT_KEY)
    }

    /// Create a record store using a custom slot key.
    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// The slot key this store reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the seed dataset if the slot has never been written.
    ///
    /// Returns `true` if the seed was written, `false` if a collection was
    /// already present. Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the slot cannot be read or written.
    pub async fn initialize_if_absent(&self) -> Result<bool> {
        if self.kv.contains(&self.key).await? {
            return Ok(false);
        }

        self.write_seed().await?;
        Ok(true)
    }

    /// Load the current collection.
    ///
    /// If the slot has never been written, the seed dataset is stored and
    /// returned.
    ///
    /// # Errors
    ///
    /// - `Error::Storage` if the slot cannot be read
    /// - `Error::Deserialization` if the stored data is not a valid collection
    pub async fn load(&self) -> Result<Vec<Issue>> {
        let Some(blob) = self.kv.get(&self.key).await? else {
            return self.write_seed().await;
        };

        let issues: Vec<Issue> =
            serde_json::from_str(&blob).map_err(|source| Error::Deserialization {
                key: self.key.clone(),
                source,
            })?;

        debug!(key = %self.key, count = issues.len(), "Loaded issue collection");
        Ok(issues)
    }

    /// Replace the entire stored collection.
    ///
    /// Either the whole collection is written or the previous one stays in
    /// place; a subsequent `load()` never observes a partial write.
    ///
    /// # Errors
    ///
    /// - `Error::Serialization` if an issue cannot be serialized
    /// - `Error::Storage` if the slot cannot be written
    pub async fn save(&self, issues: &[Issue]) -> Result<()> {
        let blob = serde_json::to_string(issues).map_err(Error::Serialization)?;
        self.kv.set(&self.key, &blob).await?;

        debug!(key = %self.key, count = issues.len(), "Saved issue collection");
        Ok(())
    }

    async fn write_seed(&self) -> Result<Vec<Issue>> {
        let seed = seed_issues(Utc::now());
        self.save(&seed).await?;

        info!(key = %self.key, count = seed.len(), "Initialized empty store with seed issues");
        Ok(seed)
    }
}
