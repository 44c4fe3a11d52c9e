//! Command-line options shared by the gridbot front ends.

use std::path::PathBuf;

use clap::Args;
use gridbot_sim::{ConfigError, SimulatorConfig};

/// Options that shape the simulator. Flags override values from `--config`.
#[derive(Debug, Clone, Args)]
pub struct SimArgs {
    /// JSON file with `grid_size`, `battery` and `obstacles` fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Edge length of the square grid
    #[arg(short, long)]
    grid_size: Option<u16>,

    /// Disable battery drain and recharge
    #[arg(long)]
    no_battery: bool,

    /// Start without obstacles and reject obstacle commands
    #[arg(long)]
    no_obstacles: bool,
}

impl SimArgs {
    /// Resolve the final simulator config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be loaded or the
    /// result fails validation.
    pub fn config(&self) -> Result<SimulatorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_json_file(path)?,
            None => SimulatorConfig::default(),
        };
        if let Some(size) = self.grid_size {
            config = config.with_grid_size(size);
        }
        if self.no_battery {
            config = config.with_battery(false);
        }
        if self.no_obstacles {
            config = config.with_obstacles(false);
        }
        config.validate()?;
        Ok(config)
    }
}
