//! Simulator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Grid edge length used when none is configured.
pub const DEFAULT_GRID_SIZE: u16 = 5;

/// Construction parameters for a [`Simulator`](crate::Simulator).
///
/// Missing fields in a JSON config fall back to the defaults: a 5×5 grid with
/// both the battery and the obstacle systems enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Edge length of the square grid.
    pub grid_size: u16,
    /// Enable battery drain and recharge.
    pub battery: bool,
    /// Enable obstacles (seeded with the default set).
    pub obstacles: bool,
}

impl SimulatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grid_size(mut self, grid_size: u16) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_battery(mut self, enabled: bool) -> Self {
        self.battery = enabled;
        self
    }

    #[must_use]
    pub fn with_obstacles(mut self, enabled: bool) -> Self {
        self.obstacles = enabled;
        self
    }

    /// Check that the config describes a usable grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] if `grid_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(())
    }

    /// Parse and validate a config from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyGrid`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise as
    /// [`SimulatorConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            battery: true,
            obstacles: true,
        }
    }
}
