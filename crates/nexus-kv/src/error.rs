//! Error types for nexus-kv operations.

use std::io;
use thiserror::Error;

/// The error type for nexus-kv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing a slot.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The slot key is not usable as a storage name.
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },

    /// A slot file exists but its content is not valid UTF-8.
    #[error("Slot '{0}' does not contain valid UTF-8 text")]
    InvalidUtf8(String),
}

/// A specialized Result type for nexus-kv operations.
pub type Result<T> = std::result::Result<T, Error>;
