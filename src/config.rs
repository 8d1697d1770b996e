use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Theme the session starts with
    #[serde(default)]
    pub theme: ThemeType,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
    /// Animation and auto-advance durations
    #[serde(default)]
    pub timings: Timings,
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Page fade in/out
    pub fade_ms: u64,
    /// Hub sidebar expand/collapse
    pub sidebar_ms: u64,
    /// How long the "Hi, name!" greeting stays up
    pub greeting_hold_ms: u64,
    /// How long the welcome introduction stays up
    pub welcome_hold_ms: u64,
    /// How long "Welcome back" stays up before the hub
    pub welcome_back_hold_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fade_ms: 500,
            sidebar_ms: 400,
            greeting_hold_ms: 1000,
            welcome_hold_ms: 1500,
            welcome_back_hold_ms: 2000,
        }
    }
}

impl Timings {
    /// Every duration set to zero, so flows advance on the next tick.
    pub fn instant() -> Self {
        Self {
            fade_ms: 0,
            sidebar_ms: 0,
            greeting_hold_ms: 0,
            welcome_hold_ms: 0,
            welcome_back_hold_ms: 0,
        }
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn sidebar(&self) -> Duration {
        Duration::from_millis(self.sidebar_ms)
    }

    pub fn greeting_hold(&self) -> Duration {
        Duration::from_millis(self.greeting_hold_ms)
    }

    pub fn welcome_hold(&self) -> Duration {
        Duration::from_millis(self.welcome_hold_ms)
    }

    pub fn welcome_back_hold(&self) -> Duration {
        Duration::from_millis(self.welcome_back_hold_ms)
    }
}

impl Config {
    /// Load configuration from file or create it with defaults
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeyBinding, KeymapPreset};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeType::Light);
        assert_eq!(config.keymap.preset, KeymapPreset::Standard);
        assert_eq!(config.timings.fade(), Duration::from_millis(500));
        assert_eq!(config.timings.welcome_back_hold(), Duration::from_secs(2));
    }

    #[test]
    fn test_missing_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config_path.exists());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme = ThemeType::Dark;
        config.keymap.preset = KeymapPreset::Vim;
        config
            .keymap
            .overrides
            .push(KeyBinding::new("ctrl+t", Action::ToggleTheme));
        config.timings.greeting_hold_ms = 250;
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            theme = "dark"
            [timings]
            fade_ms = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeType::Dark);
        assert_eq!(config.timings.fade_ms, 100);
        assert_eq!(config.timings.sidebar_ms, 400);
        assert!(config.keymap.overrides.is_empty());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"sepia\"").unwrap();
        assert!(Config::load_or_create(&config_path).is_err());
    }
}
