//! Nexus - a small issue tracker built on a key-value slot.
//!
//! The crate is layered bottom-up:
//! - [`storage`]: reads and writes the whole issue collection as one JSON
//!   slot of a [`nexus_kv::KeyValueStore`], seeding it on first use
//! - [`service`]: list/filter, create, update, delete and dashboard
//!   operations over that collection
//! - [`cli`], [`output`], [`app`], [`commands`]: the `nexus` binary
//!
//! # Example
//!
//! ```no_run
//! use nexus::domain::{IssueFilter, IssueStatus};
//! use nexus::service::IssueService;
//! use nexus::storage::RecordStore;
//! use nexus_kv::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> nexus::error::Result<()> {
//! let store = RecordStore::new(Arc::new(MemoryStore::new()));
//! let service = IssueService::new(store);
//!
//! let open = service
//!     .list(&IssueFilter::default().with_status(IssueStatus::Open))
//!     .await?;
//! println!("{} open issues", open.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod id_generation;
pub mod service;
pub mod stats;
pub mod storage;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod app;
pub mod commands;
pub mod config;
pub mod output;
