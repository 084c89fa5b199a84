//! Local key-value slot storage.
//!
//! This library provides a small async key-value area where each named slot
//! holds one text value. Two backends are available:
//!
//! - [`MemoryStore`]: ephemeral, process-local map (useful as a test double)
//! - [`FileStore`]: one file per slot inside a directory, replaced atomically
//!   on every write
//!
//! Both implement the object-safe [`KeyValueStore`] trait so callers can hold
//! an `Arc<dyn KeyValueStore>` and stay agnostic of the backend.
//!
//! # Example
//!
//! ```no_run
//! use nexus_kv::{FileStore, KeyValueStore};
//!
//! # async fn example() -> nexus_kv::Result<()> {
//! let store = FileStore::open(".nexus/data").await?;
//! store.set("greeting", "hello").await?;
//! assert_eq!(store.get("greeting").await?.as_deref(), Some("hello"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use atomic::write_atomic;
pub use error::{Error, Result};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, validate_key, MAX_KEY_LENGTH};
