//! # gridbot_sim
//!
//! The simulator engine: a single robot on a bounded N×N grid.
//!
//! The [`Simulator`] owns all state (position, facing, optional battery,
//! optional obstacle set and move history) and exposes one method per
//! command. Every command is total: it either succeeds with a message and
//! mutates state, or returns a [`SimError`] and leaves state untouched.
//!
//! ## Usage
//!
//! ```rust
//! use gridbot_sim::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig::default()).unwrap();
//! assert_eq!(sim.move_forward().unwrap(), "Moved forward to (0, 1)");
//! sim.turn_right();
//! println!("{}", sim.status_report());
//! ```

pub mod battery;
pub mod config;
pub mod error;
pub mod motion;
pub mod obstacles;
pub mod render;
pub mod simulator;
pub mod status;

pub use battery::Battery;
pub use config::SimulatorConfig;
pub use error::{ConfigError, SimError};
pub use motion::Motion;
pub use obstacles::{DEFAULT_OBSTACLES, ObstacleSet, Toggle};
pub use render::GridView;
pub use simulator::{Outcome, Simulator, Snapshot};
pub use status::Status;

pub use gridbot_core::{Diagonal, Orientation, ParseError, Position};
