// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Visible toast limit and fade animation
//! - `[diagnostics]` - Event buffer capacity
//! - `[logging]` - Tracing filter directive
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.fade_enabled = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::{BufferCapacity, FadeDuration, MaxVisible};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Number of toasts shown at once.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    /// Whether toasts fade in and out.
    #[serde(default = "default_fade_enabled", skip_serializing_if = "Option::is_none")]
    pub fade_enabled: Option<bool>,

    /// Fade duration in milliseconds.
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            fade_enabled: default_fade_enabled(),
            fade_duration_ms: default_fade_duration_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Visible toast limit, clamped.
    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible.map(MaxVisible::new).unwrap_or_default()
    }

    /// Fade duration, or `None` when fades are disabled.
    #[must_use]
    pub fn fade(&self) -> Option<FadeDuration> {
        if self.fade_enabled.unwrap_or(DEFAULT_FADE_ENABLED) {
            Some(
                self.fade_duration_ms
                    .map(FadeDuration::from_millis)
                    .unwrap_or_default(),
            )
        } else {
            None
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Maximum number of diagnostic events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive (e.g. `iced_toasts=debug`).
    #[serde(default = "default_log_filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_fade_enabled() -> Option<bool> {
    Some(DEFAULT_FADE_ENABLED)
}

#[allow(clippy::unnecessary_wraps)]
fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

#[allow(clippy::unnecessary_wraps)]
fn default_log_filter() -> Option<String> {
    Some(DEFAULT_LOG_FILTER.to_string())
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the defaults plus a warning message when the file exists but
/// cannot be read or parsed.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notifications: NotificationsConfig {
                max_visible: Some(5),
                fade_enabled: Some(false),
                fade_duration_ms: Some(400),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(64),
            },
            logging: LoggingConfig {
                filter: Some("iced_toasts=trace".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nmax_visible = 2\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.notifications.max_visible, Some(2));
        assert_eq!(loaded.notifications.fade_enabled, Some(DEFAULT_FADE_ENABLED));
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn fade_is_none_when_disabled() {
        let config = NotificationsConfig {
            fade_enabled: Some(false),
            ..NotificationsConfig::default()
        };
        assert!(config.fade().is_none());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = NotificationsConfig {
            max_visible: Some(500),
            fade_enabled: Some(true),
            fade_duration_ms: Some(u64::MAX),
        };
        assert_eq!(config.max_visible().value(), MAX_MAX_VISIBLE);
        assert_eq!(
            config.fade().map(FadeDuration::as_millis),
            Some(MAX_FADE_DURATION_MS)
        );
    }
}
