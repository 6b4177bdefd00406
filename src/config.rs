//! CLI configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure holding the defaults the
//! command line falls back to when flags are omitted.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/smartspend/config.json`
//! - macOS: `~/Library/Application Support/smartspend/config.json`
//! - Windows: `%APPDATA%/smartspend/config.json`
//!
//! # Example
//!
//! ```json
//! { "variant": "medium", "snapshot": "/data/smartspend/widget.json" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::domain::Variant;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "smartspend";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted CLI defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Widget layout used when `--variant` is not given.
    #[serde(default)]
    pub variant: Variant,
    /// Snapshot file used when `--snapshot` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the default path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Returns `path` when given, otherwise the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is given and the configuration directory
    /// cannot be determined.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A missing file silently yields defaults; an unreadable or invalid one
    /// is logged and also yields defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = match Self::resolve_path(path) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("Config path unavailable, using defaults: {err}");
                return Self::default();
            }
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace the fields that are given, keep the others.
    #[must_use]
    pub fn updated(mut self, variant: Option<Variant>, snapshot: Option<PathBuf>) -> Self {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if snapshot.is_some() {
            self.snapshot = snapshot;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
