//! Owned simulator sessions.
//!
//! A [`Session`] is the single owner of a [`Simulator`]. Front ends hold one
//! session and route every command through it, so there is no shared global
//! state and tests can create as many independent sessions as they like.
//!
//! Reset replaces the simulator with a fresh copy of the construction-time
//! state in one assignment; nothing from the previous instance survives.

use gridbot_sim::{ConfigError, Simulator, SimulatorConfig, Status};
use tracing::{debug, info};
use uuid::Uuid;

use crate::command::Command;
use crate::error::GatewayError;
use crate::help::help_text;

/// A simulator instance plus what is needed to rebuild it.
#[derive(Debug, Clone)]
pub struct Session {
    /// Construction-time state, cloned on reset.
    pristine: Simulator,
    simulator: Simulator,
    /// Identifies the current simulator instance; regenerated on reset.
    instance_id: Uuid,
}

impl Session {
    /// Create a session with a freshly built simulator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config is invalid.
    pub fn new(config: SimulatorConfig) -> Result<Self, ConfigError> {
        let pristine = Simulator::new(config)?;
        let instance_id = Uuid::new_v4();
        info!(
            %instance_id,
            grid_size = config.grid_size,
            battery = config.battery,
            obstacles = config.obstacles,
            "simulator session created"
        );
        Ok(Self {
            simulator: pristine.clone(),
            pristine,
            instance_id,
        })
    }

    #[must_use]
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        self.simulator.config()
    }

    #[must_use]
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.simulator.status()
    }

    /// Discard the current simulator and start over from the initial state.
    pub fn reset(&mut self) -> String {
        let previous = self.instance_id;
        self.simulator = self.pristine.clone();
        self.instance_id = Uuid::new_v4();
        info!(%previous, instance_id = %self.instance_id, "simulator reset");
        "Robot reset to initial position".to_string()
    }

    /// Run one command against the simulator.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Simulation`] when the simulator rejects the
    /// command; state is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<String, GatewayError> {
        debug!(?command, "executing command");
        let sim = &mut self.simulator;
        let message = match command {
            Command::Forward => sim.move_forward()?,
            Command::Backward => sim.move_backward()?,
            Command::Left => sim.turn_left(),
            Command::Right => sim.turn_right(),
            Command::Diagonal(dir) => sim.diagonal_move_token(&dir)?,
            Command::Face(dir) => sim.turn_to_face_token(&dir)?,
            Command::Recharge => sim.recharge(),
            Command::Report => sim.status_report(),
            Command::Status => serde_json::to_string_pretty(&sim.status())
                .map_err(GatewayError::Encode)?,
            Command::Grid => sim.render_grid(),
            Command::ToggleObstacle(cell) => sim.toggle_obstacle(cell)?,
            Command::ClearObstacles => sim.clear_obstacles()?,
            Command::ResetObstacles => sim.reset_obstacles()?,
            Command::Help => help_text(),
            Command::Reset => self.reset(),
        };
        Ok(message)
    }

    /// Parse and run one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownCommand`] for unparseable input, or any
    /// error from [`Session::execute`].
    pub fn execute_line(&mut self, line: &str) -> Result<String, GatewayError> {
        let command: Command = line.parse()?;
        self.execute(command)
    }
}

impl Default for Session {
    fn default() -> Self {
        let pristine = Simulator::default();
        Self {
            simulator: pristine.clone(),
            pristine,
            instance_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use gridbot_sim::{Orientation, Position, SimError};

    use super::*;

    #[test]
    fn test_scenario_forward() {
        let mut session = Session::default();
        let msg = session.execute_line("forward").unwrap();
        assert_eq!(msg, "Moved forward to (0, 1)");
        assert_eq!(session.status().position(), Position::new(0, 1));
        assert_eq!(session.status().facing, Orientation::North);
    }

    #[test]
    fn test_scenario_right_forward_forward() {
        let mut session = Session::default();
        for line in ["right", "forward", "f"] {
            session.execute_line(line).unwrap();
        }
        let status = session.status();
        assert_eq!(status.position(), Position::new(2, 0));
        assert_eq!(status.facing, Orientation::East);
    }

    #[test]
    fn test_scenario_diagonal_round_trip() {
        let mut session = Session::default();
        session.execute_line("diagonal ne").unwrap();
        assert_eq!(session.status().position(), Position::new(1, 1));
        session.execute_line("diagonal sw").unwrap();
        assert_eq!(session.status().position(), Position::ORIGIN);
        assert_eq!(session.status().battery, Some(90));
    }

    #[test]
    fn test_simulation_errors_pass_through() {
        let mut session = Session::default();
        let err = session.execute_line("back").unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Simulation(SimError::OutOfBounds { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Cannot move backward to (0, -1) - outside grid boundaries"
        );

        let err = session.execute_line("diagonal up").unwrap_err();
        assert!(err.to_string().starts_with("Invalid diagonal direction"));

        let err = session.execute_line("face up").unwrap_err();
        assert_eq!(err.to_string(), "Invalid direction: UP");
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::default();
        let err = session.execute_line("dance").unwrap_err();
        assert!(matches!(err, GatewayError::UnknownCommand(_)));
        assert_eq!(session.status().move_count, 0);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut session = Session::default();
        let first = session.instance_id();
        session.execute_line("r").unwrap();
        session.execute_line("f").unwrap();
        session.execute_line("obstacles clear").unwrap();

        assert_eq!(
            session.execute_line("reset").unwrap(),
            "Robot reset to initial position"
        );
        let status = session.status();
        assert_eq!(status.position(), Position::ORIGIN);
        assert_eq!(status.facing, Orientation::North);
        assert_eq!(status.battery, Some(100));
        assert_eq!(status.move_count, 0);
        assert_eq!(status.obstacles.map(|o| o.len()), Some(3));
        assert_eq!(session.simulator().history().len(), 1);
        assert_ne!(session.instance_id(), first);
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = SimulatorConfig::new()
            .with_grid_size(7)
            .with_battery(false);
        let mut session = Session::new(config).unwrap();
        session.execute_line("f").unwrap();
        session.reset();
        assert_eq!(*session.config(), config);
        assert_eq!(session.status().grid_size, 7);
        assert_eq!(session.status().battery, None);
    }

    #[test]
    fn test_obstacle_commands() {
        let mut session = Session::default();
        assert_eq!(
            session.execute_line("obstacle 4 4").unwrap(),
            "Added obstacle at (4, 4)"
        );
        assert_eq!(
            session.execute_line("obstacle 4 4").unwrap(),
            "Removed obstacle at (4, 4)"
        );
        let err = session.execute_line("obstacle 0 0").unwrap_err();
        assert_eq!(err.to_string(), "Cannot place obstacle on robot position");
        assert_eq!(
            session.execute_line("obstacles reset").unwrap(),
            "Obstacles reset to default"
        );
    }

    #[test]
    fn test_read_only_commands() {
        let mut session = Session::default();
        let before = session.status();
        assert!(session.execute_line("report").unwrap().starts_with("Robot Status Report:"));
        assert!(session.execute_line("grid").unwrap().contains("CURRENT GRID STATE"));
        assert!(session.execute_line("help").unwrap().contains("Available Commands:"));
        let json = session.execute_line("status").unwrap();
        let parsed: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, before);
        assert_eq!(session.status(), before);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Session::default();
        let b = Session::default();
        a.execute_line("f").unwrap();
        assert_eq!(a.status().move_count, 1);
        assert_eq!(b.status().move_count, 0);
        assert_ne!(a.instance_id(), b.instance_id());
    }
}
