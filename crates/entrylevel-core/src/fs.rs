//! Filesystem utilities for atomic writes.
//!
//! Every document EntryLevel persists goes through [`write_atomic`]: the bytes
//! land in a temp file next to the destination, get synced, then replace the
//! destination with a rename. A failed write never leaves a partial file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{EntryLevelError, Result};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `data` to `path` atomically, creating the parent directory if needed.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| EntryLevelError::Storage(format!("Invalid path: {}", path.display())))?;
    fs::create_dir_all(parent).map_err(|e| {
        EntryLevelError::Storage(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| EntryLevelError::Storage(format!("Invalid filename: {}", path.display())))?;
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, Uuid::new_v4().simple()));

    let write_temp = || -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()
    };
    if let Err(e) = write_temp() {
        let _ = fs::remove_file(&temp_path);
        return Err(EntryLevelError::Storage(format!(
            "Temp file write failed for {}: {}",
            path.display(),
            e
        )));
    }

    rename_with_fallback(&temp_path, path)
        .map_err(|e| EntryLevelError::Storage(format!("{}: {}", path.display(), e)))
}

/// Serialize `value` as pretty-printed JSON and write it atomically.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| EntryLevelError::Storage(format!("Failed to serialize JSON: {}", e)))?;
    write_atomic(path, json.as_bytes())
}
