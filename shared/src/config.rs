//! Configuration persistence utilities
//!
//! Provides the picker tuning parameters and functions for loading and saving
//! per-screen configuration to disk.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::gesture::DEFAULT_HOLD_DELAY;
use crate::selector::DEFAULT_ACTIVATION_RADIUS;

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    NoConfigDir,
    /// IO error while reading/writing config
    Io(io::Error),
    /// Failed to parse config file
    Parse(toml::de::Error),
    /// Failed to serialize config
    Serialize(toml::ser::Error),
    /// Config parsed but holds unusable values
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Tuning parameters for the reaction picker
///
/// Larger radii and delays trade responsiveness for fewer accidental
/// triggers; none of them change how sectors are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Dead-zone radius around the center, in pixels
    pub activation_radius: f64,
    /// Hold time before a press becomes a drag
    pub hold_delay_ms: u64,
    /// Diameter of the wheel background
    pub menu_diameter: f64,
    /// Diameter of one option control
    pub option_size: f64,
    /// Distance from the center to each option control
    pub option_ring_radius: f64,
    /// Pulse feedback when the hovered sector changes
    pub haptics: bool,
    /// Center the wheel on the press point instead of the trigger midpoint
    pub anchor_on_press: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            activation_radius: DEFAULT_ACTIVATION_RADIUS,
            hold_delay_ms: DEFAULT_HOLD_DELAY.as_millis() as u64,
            menu_diameter: 280.0,
            option_size: 48.0,
            option_ring_radius: 90.0,
            haptics: true,
            anchor_on_press: true,
        }
    }
}

impl PickerConfig {
    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }

    /// Reject values the wheel cannot be drawn or hit-tested with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("menu_diameter", self.menu_diameter),
            ("option_size", self.option_size),
            ("option_ring_radius", self.option_ring_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive", name)));
            }
        }
        if !(self.activation_radius.is_finite() && self.activation_radius >= 0.0) {
            return Err(ConfigError::Invalid(
                "activation_radius must be zero or positive".to_string(),
            ));
        }
        if self.option_ring_radius > self.menu_diameter / 2.0 {
            return Err(ConfigError::Invalid(
                "option_ring_radius must fit inside the menu".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the base configuration directory for all screens
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "dream-reactions", "screens")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific screen
pub fn config_path(screen_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", screen_name)))
}

/// Load configuration for a specific screen
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(screen_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(screen_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    log::debug!("loaded config from {}", path.display());
    Ok(Some(config))
}

/// Save configuration for a specific screen
pub fn save_config<T: Serialize>(screen_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(screen_name).ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(())
}

/// Delete configuration for a specific screen
pub fn delete_config(screen_name: &str) -> Result<(), ConfigError> {
    let path = config_path(screen_name).ok_or(ConfigError::NoConfigDir)?;

    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
