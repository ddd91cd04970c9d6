//! Application context for the EntryLevel CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file and data store.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use entrylevel_core::DataStore;

use crate::cli::Cli;
use crate::config::{read_config, EntryLevelConfig};
use crate::errors::CliError;
use crate::ui::{UiContext, UiFlags};

use super::resolver::{missing_data_message, resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with config and storage.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<EntryLevelConfig>>,
    store: OnceCell<DataStore>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            store: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists at the resolved path.
    pub fn config(&self) -> anyhow::Result<Option<&EntryLevelConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// The resolved data directory (may not exist yet).
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the data store, failing if the data directory was never initialized.
    pub fn store(&self) -> anyhow::Result<&DataStore> {
        self.store.get_or_try_init(|| -> anyhow::Result<DataStore> {
            let root = self.data_dir()?;
            if !root.exists() {
                return Err(CliError::not_found(
                    missing_data_message(&root),
                    "Hint: Run `entrylevel init` to create it.",
                )
                .into());
            }
            Ok(DataStore::open(&root)?)
        })
    }

    /// Build the UI context from CLI flags and the `[ui]` config section.
    ///
    /// An unreadable config file falls back to flags only.
    pub fn ui_context(&self) -> UiContext {
        let (no_color, ascii) = match self.config() {
            Ok(Some(config)) => (config.ui.no_color, config.ui.ascii),
            _ => (false, false),
        };
        UiContext::detect(UiFlags {
            json: self.cli.json,
            no_color: self.cli.no_color || no_color,
            ascii: self.cli.ascii || ascii,
        })
    }
}
