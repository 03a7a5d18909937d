//! Configuration persistence.
//!
//! Responsibilities:
//! - Read and write the configuration file at its well-known path.
//! - Funnel every load/save through the default merge so the persisted
//!   structure is always fully populated.
//! - Back up unreadable config files before overwriting them with defaults.
//!
//! Does NOT handle:
//! - Defining default values (see `defaults.rs`).
//! - Merge semantics (see `merge.rs`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename); a failed save never leaves a
//!   partially written file at the config path.
//! - `load` never surfaces a read or parse error; a bad file is backed up
//!   and replaced with the defaults.
//! - Write failures always propagate to the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::CONFIG_FILE_NAME;
use crate::defaults::default_configuration;
use crate::merge::{Configuration, merge_defaults};

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
fn read_config_file(path: &Path) -> Result<Configuration, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<Configuration>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Creates a backup of an unreadable config file before it is overwritten.
///
/// The backup is created by renaming the original file to a path with a
/// `.corrupt.{timestamp}` extension, preserving the contents for recovery
/// while letting the store reset the well-known path to defaults.
fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}

/// Manages loading and saving the forecast configuration on disk.
///
/// Each operation is a single read-or-write against the config file; the
/// store itself holds no configuration state between calls.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Creates a store using the well-known config file name in the
    /// working directory (`forecast_config.json`).
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Creates a store with a specific config file path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration from disk, merged over the defaults.
    ///
    /// A missing file, and equally a file that cannot be read or parsed,
    /// yields the defaults: the defaults are written to the path and a
    /// copy is returned. An unreadable file is first renamed to a
    /// `.corrupt.{timestamp}` backup (best effort).
    ///
    /// # Errors
    /// Returns an error only if writing the defaults back to disk fails;
    /// read and parse failures are self-healed, never surfaced.
    pub fn load(&self) -> Result<Configuration> {
        if self.config_path.exists() {
            match read_config_file(&self.config_path) {
                Ok(parsed) => return Ok(merge_defaults(&parsed)),
                Err(e) => {
                    let is_not_found = matches!(
                        &e,
                        ConfigFileError::Read { source, .. }
                            if source.kind() == std::io::ErrorKind::NotFound
                    );

                    if is_not_found {
                        // Raced with an external delete; nothing to back up.
                        tracing::warn!(
                            path = %self.config_path.display(),
                            error = %e,
                            "Config file not found, resetting to defaults"
                        );
                    } else {
                        match create_corrupt_backup(&self.config_path) {
                            Ok(backup_path) => {
                                tracing::warn!(
                                    path = %self.config_path.display(),
                                    backup_path = %backup_path.display(),
                                    error = %e,
                                    "Config file is unreadable, backed up and resetting to defaults"
                                );
                            }
                            Err(backup_err) => {
                                tracing::error!(
                                    path = %self.config_path.display(),
                                    error = %e,
                                    backup_error = %backup_err,
                                    "Config file is unreadable and backup failed, resetting to defaults"
                                );
                            }
                        }
                    }
                }
            }
        }

        self.save(default_configuration())?;
        Ok(default_configuration().clone())
    }

    /// Saves the configuration to disk, merged over the defaults.
    ///
    /// Writes pretty-printed JSON to a temporary file first, then renames
    /// it to the config path, so the file is never left in a partially
    /// written state.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        let merged = merge_defaults(config);

        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&merged)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved atomically"
        );

        Ok(())
    }

    /// Overwrites the config file with the defaults and returns a copy.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn reset_to_default(&self) -> Result<Configuration> {
        self.save(default_configuration())?;
        Ok(default_configuration().clone())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
