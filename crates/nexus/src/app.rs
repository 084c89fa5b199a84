//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that wires configuration, the
//! key-value backend and the issue service together for CLI commands.
//!
//! # Example
//!
//! ```no_run
//! use nexus::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     let stats = app.service().dashboard().await?;
//!     println!("{} issues", stats.total);
//!     Ok(())
//! }
//! ```

use crate::commands::init::find_nexus_root;
use crate::config::{CONFIG_FILE_NAME, NEXUS_DIR_NAME, NexusConfig};
use crate::error::{ConfigError, Result};
use crate::service::{IssueService, ServiceOptions};
use crate::storage::RecordStore;
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    service: IssueService,

    /// Path to the nexus directory (.nexus)
    nexus_dir: PathBuf,

    config: NexusConfig,
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree to find a `.nexus/` directory,
    /// loads configuration, and opens the configured storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No nexus repository is found in the directory tree
    /// - Configuration cannot be loaded
    /// - The storage backend cannot be opened
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_nexus_root(working_dir).ok_or(ConfigError::NotInitialized)?;

        let nexus_dir = root_dir.join(NEXUS_DIR_NAME);
        let config = NexusConfig::load(&nexus_dir.join(CONFIG_FILE_NAME)).await?;

        let kv = config.storage.open_backend(&root_dir).await?;
        let store = RecordStore::with_key(kv, config.storage.slot_key.clone());
        let service = IssueService::with_options(
            store,
            ServiceOptions {
                latency: config.latency(),
            },
        );

        tracing::debug!(
            root = %root_dir.display(),
            backend = %config.storage.backend,
            "Opened nexus repository"
        );

        Ok(Self {
            service,
            nexus_dir,
            config,
        })
    }

    /// Get an immutable reference to the issue service.
    pub fn service(&self) -> &IssueService {
        &self.service
    }

    /// Get a mutable reference to the issue service.
    pub fn service_mut(&mut self) -> &mut IssueService {
        &mut self.service
    }

    /// Get the path to the nexus directory.
    pub fn nexus_dir(&self) -> &Path {
        &self.nexus_dir
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &NexusConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{self, InitialData};
    use crate::error::Error;
    use tempfile::TempDir;

    #[tokio::test]
    async fn app_from_initialized_directory() {
        let temp_dir = TempDir::new().unwrap();
        init::init(temp_dir.path(), InitialData::Seed).await.unwrap();

        let app = App::from_directory(temp_dir.path()).await.unwrap();

        assert!(app.nexus_dir().ends_with(".nexus"));
        assert_eq!(app.config().storage.backend, "file");
        assert_eq!(app.service().dashboard().await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn app_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        init::init(temp_dir.path(), InitialData::Empty).await.unwrap();

        let sub_dir = temp_dir.path().join("src").join("lib");
        std::fs::create_dir_all(&sub_dir).unwrap();

        let app = App::from_directory(&sub_dir).await.unwrap();
        assert_eq!(app.service().dashboard().await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn app_from_uninitialized_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = App::from_directory(temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotInitialized)));
    }
}
