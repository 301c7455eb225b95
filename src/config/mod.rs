// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, loading and saving user
//! defaults to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Defaults applied to toasts that don't set them explicitly
//! - `[overlay]` - Host placement metrics (edge offset, gap)
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::ui::notifications::Variant;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.variant = Some(Variant::Success);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::{parse_color, HostMetrics, Position, ToastConfig, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults for toasts created through [`Config::toast`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ToastDefaults {
    /// Countdown length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Background override as a hex string (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<String>,
}

impl ToastDefaults {
    /// Checks that every color override parses.
    pub fn validate(&self) -> Result<()> {
        for color in [&self.background, &self.text_color, &self.progress_color]
            .into_iter()
            .flatten()
        {
            parse_color(color)?;
        }
        Ok(())
    }
}

/// Placement metrics shared by every overlay host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Distance between anchored hosts and the window edge.
    #[serde(default = "default_edge_offset", skip_serializing_if = "Option::is_none")]
    pub edge_offset: Option<f32>,

    /// Spacing between stacked toasts.
    #[serde(default = "default_gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            edge_offset: default_edge_offset(),
            gap: default_gap(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastDefaults,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Starts a toast with the configured defaults applied.
    ///
    /// Builder calls made on the returned value still take precedence.
    pub fn toast(&self, message: impl Into<String>) -> ToastConfig {
        let mut toast = ToastConfig::new(message);
        if let Some(ms) = self.toast.duration_ms {
            toast = toast.with_duration(Duration::from_millis(ms));
        }
        if let Some(variant) = self.toast.variant {
            toast = toast.with_variant(variant);
        }
        if let Some(position) = self.toast.position {
            toast = toast.with_position(position);
        }
        // Colors are validated on load; a value set in code that fails to
        // parse is left to the variant default.
        let color = |value: &Option<String>| value.as_deref().and_then(|v| parse_color(v).ok());
        if let Some(background) = color(&self.toast.background) {
            toast = toast.with_background(background);
        }
        if let Some(text) = color(&self.toast.text_color) {
            toast = toast.with_text_color(text);
        }
        if let Some(progress) = color(&self.toast.progress_color) {
            toast = toast.with_progress_color(progress);
        }
        toast
    }

    /// Returns the host metrics described by the `[overlay]` section.
    #[must_use]
    pub fn host_metrics(&self) -> HostMetrics {
        HostMetrics {
            edge_offset: self.overlay.edge_offset.unwrap_or(DEFAULT_EDGE_OFFSET),
            gap: self.overlay.gap.unwrap_or(DEFAULT_GAP),
            ..HostMetrics::default()
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_edge_offset() -> Option<f32> {
    Some(DEFAULT_EDGE_OFFSET)
}

fn default_gap() -> Option<f32> {
    Some(DEFAULT_GAP)
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
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
    config.toast.validate()?;
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
