//! Simulator error types.

use std::path::PathBuf;

use gridbot_core::{ParseError, Position};

use crate::motion::Motion;

/// A rejected command. The `Display` text is the message reported to the
/// caller; the simulator state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The battery holds less than one move's worth of charge.
    #[error("Insufficient battery to move")]
    InsufficientBattery,

    /// The target cell holds an obstacle.
    #[error("Cannot {attempt} to {target} - obstacle present", attempt = .motion.attempt())]
    Blocked { motion: Motion, target: Position },

    /// The target cell lies outside the grid.
    #[error("Cannot {attempt} to {target} - outside grid boundaries", attempt = .motion.attempt())]
    OutOfBounds { motion: Motion, target: Position },

    /// An obstacle may not be placed on the robot's own cell.
    #[error("Cannot place obstacle on robot position")]
    ObstacleOnRobot(Position),

    /// An obstacle command was issued while obstacles are switched off.
    #[error("Obstacle system is disabled")]
    ObstaclesDisabled,

    /// An obstacle may only be placed inside the grid.
    #[error("Cannot place obstacle at {0} - outside grid boundaries")]
    ObstacleOutsideGrid(Position),

    /// A direction or orientation token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while building or loading a [`SimulatorConfig`](crate::SimulatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
