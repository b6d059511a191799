//! Configuration file loader
//!
//! Every key is optional. A config that is present but malformed, or whose
//! profile is out of range, is an error rather than a silent fallback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use finch_core::config::{ParameterProfile, ProfileError};
use finch_drivers::SimConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Embedded default configuration (compiled into the binary)
const EMBEDDED_CONFIG: &str = include_str!("../../finch.toml");

/// Config file looked up when none is given
pub const DEFAULT_CONFIG_PATH: &str = "finch.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid profile in {}: {error}", .path.display())]
    Profile { path: PathBuf, error: ProfileError },

    #[error("[simulator] {key} in {} must be 0-255, got {value}", .path.display())]
    LightLevel {
        path: PathBuf,
        key: &'static str,
        value: i32,
    },
}

/// Range of a light sensor reading
pub const LIGHT_LEVEL_MAX: i32 = 255;

/// Readings reported by the simulated robot
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub temperature_c: f64,
    pub left_light: i32,
    pub right_light: i32,
}

impl SimulatorConfig {
    /// Check the configured light levels, returning the first bad key
    pub fn validate(&self) -> Result<(), (&'static str, i32)> {
        for (key, value) in [
            ("left_light", self.left_light),
            ("right_light", self.right_light),
        ] {
            if !(0..=LIGHT_LEVEL_MAX).contains(&value) {
                return Err((key, value));
            }
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            temperature_c: sim.temperature_c,
            left_light: sim.left_light,
            right_light: sim.right_light,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlConfig {
    /// Directory holding saved programs
    pub data_dir: PathBuf,
    /// Sleep for real during waits
    pub realtime: bool,
    /// Append-time defaults
    pub profile: ParameterProfile,
    pub simulator: SimulatorConfig,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("Data"),
            realtime: true,
            profile: ParameterProfile::default(),
            simulator: SimulatorConfig::default(),
        }
    }
}

impl ControlConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is tried and the embedded defaults are used if it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    return Self::embedded();
                }
                default
            }
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG, Path::new("<embedded finch.toml>"))
    }

    /// Parse and validate TOML text; `origin` is used in errors
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config
            .profile
            .validate()
            .map_err(|error| ConfigError::Profile {
                path: origin.to_path_buf(),
                error,
            })?;
        config
            .simulator
            .validate()
            .map_err(|(key, value)| ConfigError::LightLevel {
                path: origin.to_path_buf(),
                key,
                value,
            })?;
        Ok(config)
    }

    /// Simulator settings for this configuration
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            realtime: self.realtime,
            temperature_c: self.simulator.temperature_c,
            left_light: self.simulator.left_light,
            right_light: self.simulator.right_light,
        }
    }
}
