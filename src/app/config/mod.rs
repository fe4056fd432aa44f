// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Display label (group name)
//! - `[layout]` - Responsive breakpoint
//! - `[gesture]` - Swipe threshold and policy
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `UED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! The application only reads this file. Saving exists for tooling and tests.
//!
//! # Examples
//!
//! ```no_run
//! use ued_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("two-pane from {} px", config.breakpoint().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{Breakpoint, SwipePolicy, SwipeThreshold};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr", "vi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Label shown after the app name in the title bar and photo banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Minimum window width for the two-pane layout.
    #[serde(
        default = "default_two_pane_min_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub two_pane_min_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            two_pane_min_width: default_two_pane_min_width(),
        }
    }
}

/// Swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Displacement per pointer sample needed to navigate.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// `once-per-gesture` or `per-sample`.
    #[serde(
        default = "default_swipe_policy",
        with = "swipe_policy_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_policy: Option<SwipePolicy>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            swipe_policy: default_swipe_policy(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Config {
    /// Display label from the config, or the built-in default.
    /// Blank labels are treated as missing.
    #[must_use]
    pub fn group_name(&self) -> String {
        self.gallery
            .group_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_GROUP_NAME)
            .to_string()
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.layout
            .two_pane_min_width
            .map(Breakpoint::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.gesture
            .swipe_threshold
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_policy(&self) -> SwipePolicy {
        self.gesture.swipe_policy.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_two_pane_min_width() -> Option<f32> {
    Some(DEFAULT_TWO_PANE_MIN_WIDTH)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_swipe_policy() -> Option<SwipePolicy> {
    Some(SwipePolicy::default())
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

mod swipe_policy_serde {
    use crate::domain::ui::SwipePolicy;
    use serde::{Deserialize, Deserializer, Serializer};

    const ONCE_PER_GESTURE: &str = "once-per-gesture";
    const PER_SAMPLE: &str = "per-sample";

    pub fn serialize<S>(value: &Option<SwipePolicy>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(SwipePolicy::OncePerGesture) => serializer.serialize_str(ONCE_PER_GESTURE),
            Some(SwipePolicy::PerSample) => serializer.serialize_str(PER_SAMPLE),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SwipePolicy>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        match raw.to_lowercase().as_str() {
            ONCE_PER_GESTURE => Ok(Some(SwipePolicy::OncePerGesture)),
            PER_SAMPLE => Ok(Some(SwipePolicy::PerSample)),
            other => Err(D::Error::custom(format!("invalid swipe_policy: {}", other))),
        }
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
                    tracing::warn!(path = %path.display(), %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
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
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.group_name(), DEFAULT_GROUP_NAME);
        assert_eq!(config.breakpoint().value(), 700.0);
        assert_eq!(config.swipe_threshold().value(), 18.0);
        assert_eq!(config.swipe_policy(), SwipePolicy::OncePerGesture);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("vi".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                group_name: Some("Nhóm 7".to_string()),
            },
            layout: LayoutConfig {
                two_pane_min_width: Some(840.0),
            },
            gesture: GestureConfig {
                swipe_threshold: Some(24.0),
                swipe_policy: Some(SwipePolicy::PerSample),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\ngroup_name = \"Nhóm 2\"\n").expect("write file");

        let config = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(config.group_name(), "Nhóm 2");
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.gesture, GestureConfig::default());
    }

    #[test]
    fn swipe_policy_accepts_kebab_case() {
        let config: Config =
            toml::from_str("[gesture]\nswipe_policy = \"per-sample\"\n").expect("valid toml");
        assert_eq!(config.swipe_policy(), SwipePolicy::PerSample);
    }

    #[test]
    fn gesture_section_without_policy_matches_default() {
        let config: Config =
            toml::from_str("[gesture]\nswipe_threshold = 18.0\n").expect("valid toml");
        assert_eq!(config.gesture, GestureConfig::default());
        assert_eq!(
            config.gesture.swipe_policy,
            Some(SwipePolicy::OncePerGesture)
        );
    }

    #[test]
    fn unknown_swipe_policy_is_rejected() {
        let result = toml::from_str::<Config>("[gesture]\nswipe_policy = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[layout]\ntwo_pane_min_width = 5.0\n[gesture]\nswipe_threshold = -3.0\n",
        )
        .expect("valid toml");
        assert_eq!(config.breakpoint().value(), 320.0);
        assert_eq!(config.swipe_threshold().value(), 1.0);
    }

    #[test]
    fn blank_group_name_falls_back_to_default() {
        let mut config = Config::default();
        config.gallery.group_name = Some("   ".to_string());
        assert_eq!(config.group_name(), DEFAULT_GROUP_NAME);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"System\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("portable");
        let mut config = Config::default();
        config.gallery.group_name = Some("Nhóm 4".to_string());

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.group_name(), "Nhóm 4");
    }
}
