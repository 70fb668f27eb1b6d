// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[lightbox]` - Wheel zoom step and swipe threshold
//! - `[slideshow]` - Auto-advance interval
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GALLERY_LIGHTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lightbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::{SlideshowInterval, SwipeThreshold, ZoomStep};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the notice shown when `settings.toml` could not be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Lightbox interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Zoom change per wheel step.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f32>,

    /// Horizontal distance a drag must cover to count as a swipe.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_step: default_wheel_zoom_step(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds.
    #[serde(
        default = "default_slideshow_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slideshow_interval_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Lightbox interaction settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,

    /// Slideshow settings.
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

impl Config {
    /// Wheel zoom step, clamped to the supported range.
    #[must_use]
    pub fn wheel_zoom_step(&self) -> ZoomStep {
        self.lightbox
            .wheel_zoom_step
            .map_or_else(ZoomStep::default, ZoomStep::new)
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.lightbox
            .swipe_threshold_px
            .map_or_else(SwipeThreshold::default, SwipeThreshold::new)
    }

    /// Slideshow period, clamped to the supported range.
    #[must_use]
    pub fn slideshow_interval(&self) -> SlideshowInterval {
        self.slideshow
            .interval_ms
            .map_or_else(SlideshowInterval::default, SlideshowInterval::from_millis)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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
    if let Some(path) = get_config_path_with_override(base_dir) {
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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            lightbox: LightboxConfig {
                wheel_zoom_step: Some(0.2),
                swipe_threshold_px: Some(80.0),
            },
            slideshow: SlideshowConfig {
                interval_ms: Some(3500),
            },
        };

        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);
        save_to_path(&config, &path).expect("save should succeed");

        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"dark\"\n").expect("write config");

        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.lightbox, LightboxConfig::default());
        assert_eq!(
            loaded.slideshow.interval_ms,
            Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("valid toml");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_file_yields_defaults_and_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not = [valid").expect("write config");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn absent_file_yields_defaults_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let config = Config {
            lightbox: LightboxConfig {
                wheel_zoom_step: Some(5.0),
                swipe_threshold_px: Some(1.0),
            },
            slideshow: SlideshowConfig {
                interval_ms: Some(10),
            },
            ..Config::default()
        };

        assert_eq!(config.wheel_zoom_step().value(), MAX_WHEEL_ZOOM_STEP);
        assert_eq!(config.swipe_threshold().value(), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(
            config.slideshow_interval().as_duration().as_millis(),
            u128::from(MIN_SLIDESHOW_INTERVAL_MS)
        );
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[lightbox]\nswipe_threshold_px = nan\nwheel_zoom_step = inf\n",
        )
        .expect("write config");

        let loaded = load_from_path(&path).expect("toml accepts nan and inf");
        assert_eq!(loaded.swipe_threshold().value(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(loaded.wheel_zoom_step().value(), DEFAULT_WHEEL_ZOOM_STEP);

        fs::write(
            &path,
            "[lightbox]\nswipe_threshold_px = -inf\nwheel_zoom_step = nan\n",
        )
        .expect("write config");
        let loaded = load_from_path(&path).expect("toml accepts nan and inf");
        assert_eq!(loaded.swipe_threshold().value(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(loaded.wheel_zoom_step().value(), DEFAULT_WHEEL_ZOOM_STEP);
    }
}
