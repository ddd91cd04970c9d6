//! Path resolution for the config file and data directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, EntryLevelConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking ENTRYLEVEL_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory.
///
/// Order: `--data-dir` / `ENTRYLEVEL_DATA_DIR`, then `[storage] data_dir` from
/// the config file, then the XDG data home.
pub fn resolve_data_dir(cli: &Cli, config: Option<&EntryLevelConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data_dir.clone() {
        debug!(path = %path.display(), "data dir from flag or environment");
        return Ok(path);
    }

    if let Some(path) = config.and_then(|c| c.storage.data_dir.as_deref()) {
        if !path.trim().is_empty() {
            debug!(path, "data dir from config");
            return Ok(PathBuf::from(path));
        }
    }

    default_data_dir()
}

/// Error message when the data directory does not exist.
pub fn missing_data_message(path: &Path) -> String {
    format!(
        "No EntryLevel data found at {}\n\nRun:\n  entrylevel init\n\nOr point at existing data:\n  ENTRYLEVEL_DATA_DIR=/path/to/data entrylevel template list",
        path.display()
    )
}
