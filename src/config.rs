//! Configuration file support for the height picker.
//!
//! Widget geometry (range, density, tick interval), the starting unit and the
//! log level can be supplied as a JSON file. The selected height itself is
//! never stored.

use std::path::{Path, PathBuf};

use ruler_ui::constants::{DEFAULT_MAJOR_TICK_INTERVAL, DEFAULT_PIXEL_DENSITY};
use ruler_ui::{PixelDensity, TickLayout};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAXIMUM_CM, DEFAULT_MINIMUM_CM};
use crate::error::PickerError;
use crate::model::{Range, ScaleModel, UnitMode};
use crate::tick_labels::TickLabels;

/// Log level setting for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show value transitions
    Debug,
    /// Show every scroll sample
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Picker configuration. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,
    /// Lowest selectable height
    pub minimum_value_cm: i32,
    /// Highest selectable height
    pub maximum_value_cm: i32,
    /// Pixels per centimeter on the scale
    pub pixel_density: f32,
    /// Every n-th centimeter gets a labeled major tick
    pub major_tick_interval: u32,
    /// Unit mode shown at startup
    pub initial_unit: UnitMode,
    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            minimum_value_cm: DEFAULT_MINIMUM_CM,
            maximum_value_cm: DEFAULT_MAXIMUM_CM,
            pixel_density: DEFAULT_PIXEL_DENSITY,
            major_tick_interval: DEFAULT_MAJOR_TICK_INTERVAL,
            initial_unit: UnitMode::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PickerConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Check every geometric constraint up front.
    pub fn validate(&self) -> Result<(), PickerError> {
        let range = self.range()?;
        PixelDensity::try_new(self.pixel_density)?;
        if self.major_tick_interval == 0 {
            return Err(PickerError::Layout(ruler_ui::LayoutError::ZeroTickInterval));
        }
        log::debug!(
            "Configuration valid: [{}, {}] cm at {} px/cm",
            range.minimum(),
            range.maximum(),
            self.pixel_density
        );
        Ok(())
    }

    pub fn range(&self) -> Result<Range, PickerError> {
        Range::new(self.minimum_value_cm, self.maximum_value_cm)
    }

    /// Build a model positioned at the minimum, in the configured unit.
    pub fn build_model(&self) -> Result<ScaleModel, PickerError> {
        Ok(ScaleModel::new(self.range()?, self.pixel_density)?.with_unit(self.initial_unit))
    }

    /// Lay out the fixed ticks of the scale.
    pub fn build_tick_layout(&self) -> Result<TickLayout, PickerError> {
        let range = self.range()?;
        let density = PixelDensity::try_new(self.pixel_density)?;
        Ok(TickLayout::new(
            range.minimum(),
            range.maximum(),
            density,
            self.major_tick_interval,
        )?)
    }

    /// Unrendered label records for the major ticks.
    pub fn build_tick_labels(&self) -> Result<TickLabels, PickerError> {
        Ok(TickLabels::from_layout(&self.build_tick_layout()?))
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "height-picker.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("height_picker").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("height_picker")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the default path.
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load_from_default_path() -> Self {
        let Some(path) = Self::default_path() else {
            log::debug!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
