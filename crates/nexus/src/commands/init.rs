//! Implementation of the `init` command.
//!
//! This module handles initialization of a new nexus repository, creating
//! the `.nexus/` directory structure with configuration and the data slot.

use crate::config::{CONFIG_FILE_NAME, NEXUS_DIR_NAME, NexusConfig};
use crate::error::{ConfigError, Result};
use crate::storage::RecordStore;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the gitignore file within .nexus
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Maximum directory depth to traverse when searching for the nexus root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// How the issue collection should start out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialData {
    /// Write the two example issues
    #[default]
    Seed,
    /// Write an empty collection, so the seed is never applied
    Empty,
}

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created nexus directory
    pub nexus_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Path to the data directory holding slot files
    pub data_dir: PathBuf,
    /// Path to the created gitignore file
    pub gitignore_file: PathBuf,
    /// Number of issues in the initial collection
    pub issue_count: usize,
}

/// Initialize a new nexus repository in the given directory.
///
/// # Arguments
///
/// * `base_dir` - The base directory where `.nexus/` will be created
/// * `initial` - Whether to start with the seed issues or an empty collection
///
/// # Errors
///
/// Returns an error if:
/// - The `.nexus/` directory already exists
/// - File system operations fail
pub async fn init(base_dir: &Path, initial: InitialData) -> Result<InitResult> {
    let nexus_dir = base_dir.join(NEXUS_DIR_NAME);

    if nexus_dir.exists() {
        return Err(ConfigError::AlreadyInitialized(NEXUS_DIR_NAME.to_string()).into());
    }

    fs::create_dir_all(&nexus_dir).await?;

    let config_file = nexus_dir.join(CONFIG_FILE_NAME);
    let config = NexusConfig::default();
    config.save(&config_file).await?;

    let data_dir = config.storage.resolve_data_dir(base_dir);
    let kv = config.storage.open_backend(base_dir).await?;
    let store = RecordStore::with_key(kv, config.storage.slot_key.clone());

    let issue_count = match initial {
        InitialData::Seed => {
            store.initialize_if_absent().await?;
            store.load().await?.len()
        }
        InitialData::Empty => {
            store.save(&[]).await?;
            0
        }
    };

    let gitignore_file = nexus_dir.join(GITIGNORE_FILE_NAME);
    let gitignore_content = "\
# Leftovers from interrupted atomic writes
*.tmp
";
    fs::write(&gitignore_file, gitignore_content).await?;

    tracing::info!(dir = %nexus_dir.display(), issue_count, "Initialized nexus repository");

    Ok(InitResult {
        nexus_dir,
        config_file,
        data_dir,
        gitignore_file,
        issue_count,
    })
}

/// Check if a directory has been initialized with nexus.
///
/// Returns `true` if the `.nexus/` directory exists.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(NEXUS_DIR_NAME).exists()
}

/// Find the nexus root directory by searching up the directory tree.
///
/// Starts from the given directory and traverses parent directories
/// until a `.nexus/` directory is found, the root is reached, or
/// the maximum traversal depth is exceeded.
///
/// # Returns
///
/// Returns `Some(path)` with the directory containing `.nexus/`,
/// or `None` if no nexus repository is found within the depth limit.
pub fn find_nexus_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if is_initialized(&current) {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
