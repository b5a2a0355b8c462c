use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::ControlSettings;
use crate::conversion::DisplayUnits;
use crate::fdm::PointMassConfig;
use crate::utils::{DEFAULT_FIXED_RATE_HZ, MAX_FIXED_RATE_HZ};

const CONFIG_DIR: &str = "flyer_bridge";
const CONFIG_FILE: &str = "bridge.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid bridge configuration: {0}")]
    ValidationError(String),
}

/// Bridge configuration, read from YAML. Every field has a default.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Host fixed physics rate (Hz).
    pub fixed_rate_hz: f64,
    pub controls: ControlSettings,
    pub display: DisplayUnits,
    /// Added to the model heading before it reaches the host (deg).
    pub heading_offset_deg: f64,
    /// Let the model drive its own controls.
    pub scripted: bool,
    pub aircraft: PointMassConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            fixed_rate_hz: DEFAULT_FIXED_RATE_HZ,
            controls: ControlSettings::default(),
            display: DisplayUnits::default(),
            heading_offset_deg: 0.0,
            scripted: false,
            aircraft: PointMassConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded bridge configuration from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/flyer_bridge/bridge.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default path when it exists, or fall back
    /// to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                debug!("No bridge configuration found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_rate_hz.is_finite()
            || self.fixed_rate_hz <= 0.0
            || self.fixed_rate_hz > MAX_FIXED_RATE_HZ
        {
            return Err(ConfigError::ValidationError(format!(
                "fixed_rate_hz must be in (0, {}], got {}",
                MAX_FIXED_RATE_HZ, self.fixed_rate_hz
            )));
        }

        let controls = &self.controls;
        if !controls.trim_step.is_finite() || controls.trim_step <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "trim_step must be positive, got {}",
                controls.trim_step
            )));
        }
        if !controls.throttle_rate.is_finite() || controls.throttle_rate <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "throttle_rate must be positive, got {}",
                controls.throttle_rate
            )));
        }
        if controls.flap_detents == 0 {
            return Err(ConfigError::ValidationError(
                "flap_detents must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&controls.axis_dead_zone) {
            return Err(ConfigError::ValidationError(format!(
                "axis_dead_zone must be in [0, 1), got {}",
                controls.axis_dead_zone
            )));
        }
        if !self.heading_offset_deg.is_finite() {
            return Err(ConfigError::ValidationError(
                "heading_offset_deg must be finite".to_string(),
            ));
        }

        self.aircraft
            .validate()
            .map_err(|err| ConfigError::ValidationError(err.to_string()))
    }
}
