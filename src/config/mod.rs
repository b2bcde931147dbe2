// SPDX-License-Identifier: MPL-2.0
//! This module handles the dashboard's notification preferences, including
//! loading and saving them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use pharmacy_toasts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notifications.max_notifications = 3;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.notifications.max_notifications, 3);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::notification::{DismissDelay, MaxNotifications};
use crate::error::Result;
use crate::notifications::{NotificationSettings, ToastPosition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PharmacyDesk";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// The `[notifications]` table.
///
/// Raw values are kept as written; clamping happens in [`NotificationsConfig::settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub max_notifications: usize,
    pub default_duration_ms: u64,
    pub position: ToastPosition,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            default_duration_ms: DEFAULT_DURATION_MS,
            position: ToastPosition::default(),
        }
    }
}

impl NotificationsConfig {
    /// Converts the raw table into validated manager settings.
    #[must_use]
    pub fn settings(&self) -> NotificationSettings {
        NotificationSettings {
            max_notifications: MaxNotifications::new(self.max_notifications),
            default_duration: DismissDelay::new(self.default_duration_ms),
            position: self.position,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads settings from `path`.
///
/// A file that cannot be parsed yields the defaults; only I/O failures are errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid settings file, using defaults"
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
