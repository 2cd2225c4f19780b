//! Configuration file management
//!
//! This module handles loading and saving the user's torch preferences
//! (default brightness, strobe frequency, color filter and battery level).

use crate::constants::{
    BATTERY_DEFAULT, BRIGHTNESS_DEFAULT, BRIGHTNESS_MAX, STROBE_FREQUENCY_DEFAULT,
    STROBE_FREQUENCY_MAX, STROBE_FREQUENCY_MIN,
};
use crate::utils::color::Color;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration stored in config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Flashlight brightness in percent (default: 100)
    #[serde(default = "default_brightness")]
    pub brightness: u8,
    /// Strobe frequency step, 1 (slow) to 10 (fast) (default: 5)
    #[serde(default = "default_strobe_frequency")]
    pub strobe_frequency: u8,
    /// Color filter name or hex code (default: white)
    #[serde(default)]
    pub color: Option<String>,
    /// Simulated battery level in percent (default: 80)
    #[serde(default = "default_battery_level")]
    pub battery_level: u8,
}

fn default_brightness() -> u8 {
    BRIGHTNESS_DEFAULT
}

fn default_strobe_frequency() -> u8 {
    STROBE_FREQUENCY_DEFAULT
}

fn default_battery_level() -> u8 {
    BATTERY_DEFAULT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brightness: BRIGHTNESS_DEFAULT,
            strobe_frequency: STROBE_FREQUENCY_DEFAULT,
            color: None,
            battery_level: BATTERY_DEFAULT,
        }
    }
}

impl Config {
    /// Create a validated config
    pub fn new(
        brightness: u8,
        strobe_frequency: u8,
        color: Option<String>,
        battery_level: u8,
    ) -> Result<Self> {
        let config = Self {
            brightness,
            strobe_frequency,
            color,
            battery_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get the standard config file path
    ///
    /// - macOS: `~/Library/Application Support/illumine/config.toml`
    /// - Linux: `~/.config/illumine/config.toml`
    /// - Windows: `%APPDATA%\illumine\config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Failed to determine config directory"))?
            .join("illumine");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the standard location, falling back to defaults if
    /// the file does not exist yet
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file doesn't exist
    /// - Failed to read file
    /// - TOML parsing fails
    /// - A value is out of range
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at: {}\n\nRun 'illumine setup' to create it.",
                path.display()
            );
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to standard location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Check every value is within its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.brightness > BRIGHTNESS_MAX {
            return Err(anyhow!(
                "brightness must be 0-{}, got {}",
                BRIGHTNESS_MAX,
                self.brightness
            ));
        }
        if !(STROBE_FREQUENCY_MIN..=STROBE_FREQUENCY_MAX).contains(&self.strobe_frequency) {
            return Err(anyhow!(
                "strobe_frequency must be {}-{}, got {}",
                STROBE_FREQUENCY_MIN,
                STROBE_FREQUENCY_MAX,
                self.strobe_frequency
            ));
        }
        if self.battery_level > 100 {
            return Err(anyhow!(
                "battery_level must be 0-100, got {}",
                self.battery_level
            ));
        }
        self.get_color()?;
        Ok(())
    }

    /// The configured color filter, defaulting to white
    pub fn get_color(&self) -> Result<Color> {
        self.color
            .as_deref()
            .map(|s| s.parse::<Color>())
            .unwrap_or(Ok(Color::White))
    }
}
