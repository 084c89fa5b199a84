//! Configuration management for nexus.
//!
//! Configuration lives in `.nexus/config.yaml`:
//!
//! ```yaml
//! storage:
//!   backend: file
//!   data_dir: .nexus/data
//!   slot_key: nexus_issues_db_v1
//! latency_ms: 0
//! ```

use crate::error::{ConfigError, Result};
use crate::storage::DEFAULT_SLOT_KEY;
use nexus_kv::{FileStore, KeyValueStore, MemoryStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;

/// Name of the nexus directory
pub const NEXUS_DIR_NAME: &str = ".nexus";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the data directory inside `.nexus`
pub const DATA_DIR_NAME: &str = "data";

/// Backend name for file-backed storage
pub const FILE_BACKEND: &str = "file";

/// Backend name for ephemeral in-memory storage
pub const MEMORY_BACKEND: &str = "memory";

/// Configuration file structure for nexus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NexusConfig {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Artificial delay before each operation, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

/// Storage configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Storage backend type ("file" or "memory")
    pub backend: String,

    /// Directory holding slot files, relative to the repository root
    pub data_dir: String,

    /// Slot holding the issue collection
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: FILE_BACKEND.to_string(),
                data_dir: format!("{NEXUS_DIR_NAME}/{DATA_DIR_NAME}"),
                slot_key: default_slot_key(),
            },
            latency_ms: 0,
        }
    }
}

impl NexusConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Configured artificial latency
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl StorageConfig {
    /// Data directory resolved against the repository root
    #[must_use]
    pub fn resolve_data_dir(&self, root_dir: &Path) -> PathBuf {
        let dir = Path::new(&self.data_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root_dir.join(dir)
        }
    }

    /// Open the configured key-value backend.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UnknownBackend` for an unrecognised backend name
    /// - `Error::Storage` if the data directory cannot be created
    pub async fn open_backend(&self, root_dir: &Path) -> Result<Arc<dyn KeyValueStore>> {
        match self.backend.as_str() {
            FILE_BACKEND => {
                let store = FileStore::open(self.resolve_data_dir(root_dir)).await?;
                Ok(Arc::new(store))
            }
            MEMORY_BACKEND => Ok(Arc::new(MemoryStore::new())),
            other => Err(ConfigError::UnknownBackend(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_file_backend() {
        let config = NexusConfig::default();
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.data_dir, ".nexus/data");
        assert_eq!(config.storage.slot_key, "nexus_issues_db_v1");
        assert_eq!(config.latency(), Duration::ZERO);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let yaml = "storage:\n  backend: memory\n  data_dir: data\n";
        let config: NexusConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.storage.slot_key, DEFAULT_SLOT_KEY);
        assert_eq!(config.latency_ms, 0);
    }

    #[test]
    fn resolve_data_dir_joins_relative_paths() {
        let storage = NexusConfig::default().storage;
        let root = Path::new("/work/project");
        assert_eq!(
            storage.resolve_data_dir(root),
            PathBuf::from("/work/project/.nexus/data")
        );
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        let config = NexusConfig {
            latency_ms: 250,
            ..Default::default()
        };

        config.save(&path).await.unwrap();
        let loaded = NexusConfig::load(&path).await.unwrap();

        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn load_rejects_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "storage: [unclosed").await.unwrap();

        let err = NexusConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut storage = NexusConfig::default().storage;
        storage.backend = "postgres".to_string();

        let err = storage.open_backend(temp.path()).await.err().expect("expected error");
        assert!(matches!(
            err,
            Error::Config(ConfigError::UnknownBackend(ref name)) if name == "postgres"
        ));
    }

    #[tokio::test]
    async fn file_backend_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let storage = NexusConfig::default().storage;

        storage.open_backend(temp.path()).await.unwrap();

        assert!(temp.path().join(".nexus").join("data").is_dir());
    }
}
