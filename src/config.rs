// SPDX-License-Identifier: MPL-2.0
//! Manager-wide default configuration.
//!
//! [`Defaults`] holds the fallback values applied to every
//! [`ToastDefinition`](crate::ToastDefinition) field the caller leaves unset.
//! Hosts that want user-configurable toast behaviour can persist the struct
//! to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `GLASS_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::{Error, Result};
use crate::record::{Animation, Expiry, Position, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Default on-screen duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Fallback values resolved into each shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Auto-expiry duration in milliseconds. `0` disables auto-expiry:
    /// toasts then stay until explicitly dismissed.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    #[serde(default)]
    pub animation: Animation,

    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub variant: Variant,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            animation: Animation::default(),
            position: Position::default(),
            variant: Variant::default(),
        }
    }
}

impl Defaults {
    /// The expiry policy encoded by `duration_ms`.
    #[must_use]
    pub fn expiry(&self) -> Expiry {
        if self.duration_ms == 0 {
            Expiry::Never
        } else {
            Expiry::after_ms(self.duration_ms)
        }
    }
}

/// Resolves the directory holding the config file.
///
/// Honors `GLASS_TOAST_CONFIG_DIR` before falling back to the platform
/// config directory.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("GLASS_TOAST_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("glass_toast"))
}

/// The resolved config file path, if a config directory is available.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads defaults from the resolved config path.
///
/// Missing directory or file yields `Defaults::default()`; a malformed file
/// is logged and also falls back, so toast behaviour degrades rather than
/// erroring at startup.
#[must_use]
pub fn load() -> Defaults {
    let Some(path) = config_file_path() else {
        return Defaults::default();
    };
    match load_from_path(&path) {
        Ok(defaults) => defaults,
        Err(error) => {
            log::warn!("failed to load toast defaults from {path:?}: {error}");
            Defaults::default()
        }
    }
}

/// Loads defaults from an explicit path. A missing file is not an error.
pub fn load_from_path(path: &Path) -> Result<Defaults> {
    if !path.exists() {
        return Ok(Defaults::default());
    }
    let contents = fs::read_to_string(path)?;
    let defaults = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    Ok(defaults)
}

/// Saves defaults to the resolved config path.
pub fn save(defaults: &Defaults) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(defaults, &path)
}

/// Saves defaults to an explicit path, creating parent directories.
pub fn save_to_path(defaults: &Defaults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(defaults).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, contents)?;
    Ok(())
}
