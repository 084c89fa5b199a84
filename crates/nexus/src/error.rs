//! Error types for nexus operations.

use crate::domain::IssueId;
use crate::id_generation::IdGenerationError;
use std::io;
use thiserror::Error;

/// The error type for nexus operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The key-value area failed to read or write a slot.
    #[error("Storage error: {0}")]
    Storage(#[from] nexus_kv::Error),

    /// The stored collection does not parse as a list of issues.
    #[error("Stored data in slot '{key}' is not a valid issue collection: {source}")]
    Deserialization {
        /// Slot that held the malformed data
        key: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("Failed to serialize issues: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Issue not found.
    #[error("Issue not found: {0}")]
    IssueNotFound(IssueId),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No unique ID could be generated.
    #[error(transparent)]
    IdGeneration(#[from] IdGenerationError),
}

/// Configuration and repository discovery errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `.nexus/` directory was found from the working directory upward.
    #[error("Not a nexus repository (or any parent directory). Run 'nexus init' first.")]
    NotInitialized,

    /// `init` was run where a repository already exists.
    #[error("Nexus is already initialized in this directory. Found existing '{0}'")]
    AlreadyInitialized(String),

    /// The configuration file could not be parsed or written.
    #[error("Configuration error: {0}")]
    Parse(String),

    /// The configured storage backend is not recognised.
    #[error("Unknown storage backend '{0}' (expected 'file' or 'memory')")]
    UnknownBackend(String),
}

/// A specialized Result type for nexus operations.
pub type Result<T> = std::result::Result<T, Error>;
