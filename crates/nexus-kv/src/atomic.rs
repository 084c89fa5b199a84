//! Atomic write operations for slot files.
//!
//! This module provides crash-safe replacement of a file's content using the
//! temp-file-then-rename pattern.
//!
//! # Atomicity Guarantee
//!
//! On POSIX systems, file renames within the same filesystem are atomic
//! operations. This module relies on that property:
//!
//! 1. Data is first written to a temporary file with a `.tmp` extension
//! 2. The temporary file is flushed, synced and closed
//! 3. The temporary file is atomically renamed to the target path
//!
//! If a crash occurs during step 1 or 2, the original file remains intact.
//! A reader that opens the target path after [`write_atomic`] returns always
//! sees either the old content or the new content, never a mix.
//!
//! # Examples
//!
//! ```no_run
//! use nexus_kv::write_atomic;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! write_atomic("data/issues.json", b"[]").await?;
//! # Ok(())
//! # }
//! ```

use crate::Result;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Atomically replaces the content of `path` with `contents`.
///
/// # Errors
///
/// Returns an error if:
/// - The temporary file cannot be created or written
/// - The atomic rename fails (e.g., cross-filesystem move)
///
/// On failure the original file (if any) is left unchanged and the temporary
/// file is removed on a best-effort basis.
pub async fn write_atomic<P>(path: P, contents: &[u8]) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, contents).await {
        // Best-effort cleanup of temp file
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    tracing::trace!(path = %path.display(), bytes = contents.len(), "Atomic write complete");
    Ok(())
}

/// Creates a temporary file path for atomic write operations.
///
/// If the original path has an extension, `.tmp` is appended to it
/// (`issues.json` -> `issues.json.tmp`); otherwise the extension becomes `tmp`.
pub(crate) fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

async fn write_to_temp_file(temp_path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}
