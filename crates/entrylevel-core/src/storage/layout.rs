//! On-disk layout of a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EntryLevelError, Result};

/// File holding the Default template namespace.
pub const DEFAULT_TEMPLATES_FILE: &str = "defaultTemplates.json";

/// File holding the User template namespace.
pub const USER_TEMPLATES_FILE: &str = "userTemplates.json";

/// Suffix every record file carries.
pub const RECORD_SUFFIX: &str = ".json";

/// Paths inside one EntryLevel data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn default_templates_path(&self) -> PathBuf {
        self.templates_dir().join(DEFAULT_TEMPLATES_FILE)
    }

    pub fn user_templates_path(&self) -> PathBuf {
        self.templates_dir().join(USER_TEMPLATES_FILE)
    }

    pub fn records_dir(&self) -> PathBuf {
        self.root.join("records")
    }

    /// Create the templates and records directories.
    pub fn ensure(&self) -> Result<()> {
        for dir in [self.templates_dir(), self.records_dir()] {
            fs::create_dir_all(&dir).map_err(|e| {
                EntryLevelError::Storage(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
