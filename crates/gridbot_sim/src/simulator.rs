//! The simulator engine.
//!
//! A [`Simulator`] is the single owned unit of state. Commands are plain
//! methods; every one of them is total. Translational moves follow a fixed
//! sequence:
//!
//! 1. Battery check (short-circuits everything else).
//! 2. Target cell validity via [`Simulator::is_valid_position`].
//! 3. Commit: drain battery, move, append a history snapshot.
//!
//! Nothing is mutated before step 3, so a rejected move leaves no trace.

use gridbot_core::{Diagonal, Orientation, Position};
use tracing::debug;

use crate::battery::Battery;
use crate::config::SimulatorConfig;
use crate::error::{ConfigError, SimError};
use crate::motion::Motion;
use crate::obstacles::{ObstacleSet, Toggle};
use crate::render::GridView;
use crate::status::Status;

/// Result of a command: a success message or the reason it was rejected.
pub type Outcome = Result<String, SimError>;

/// One history entry: where the robot was and which way it faced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub facing: Orientation,
}

/// A single robot on a square grid.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
    size: i32,
    position: Position,
    facing: Orientation,
    battery: Option<Battery>,
    obstacles: Option<ObstacleSet>,
    /// Initial state plus one entry per committed translational move.
    history: Vec<Snapshot>,
}

impl Simulator {
    /// Build a simulator with the robot at `(0, 0)` facing north.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] if the config has a zero grid size.
    pub fn new(config: SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimulatorConfig) -> Self {
        let size = i32::from(config.grid_size);
        let position = Position::ORIGIN;
        let facing = Orientation::North;
        let mut sim = Self {
            config,
            size,
            position,
            facing,
            battery: config.battery.then(Battery::new),
            obstacles: config
                .obstacles
                .then(|| ObstacleSet::defaults(size, position)),
            history: Vec::new(),
        };
        sim.record();
        sim
    }

    // -- Queries --

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    #[must_use]
    pub fn grid_size(&self) -> u16 {
        self.config.grid_size
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn facing(&self) -> Orientation {
        self.facing
    }

    /// `None` when the battery system is disabled.
    #[must_use]
    pub fn battery(&self) -> Option<Battery> {
        self.battery
    }

    /// `None` when the obstacle system is disabled.
    #[must_use]
    pub fn obstacles(&self) -> Option<&ObstacleSet> {
        self.obstacles.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of committed translational moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// In bounds and not blocked. The only validity check used by moves.
    #[must_use]
    pub fn is_valid_position(&self, cell: Position) -> bool {
        cell.within(self.size) && !self.is_obstacle(cell)
    }

    fn is_obstacle(&self, cell: Position) -> bool {
        self.obstacles.as_ref().is_some_and(|o| o.contains(cell))
    }

    // -- Movement --

    pub fn move_forward(&mut self) -> Outcome {
        self.translate(Motion::Forward)
    }

    pub fn move_backward(&mut self) -> Outcome {
        self.translate(Motion::Backward)
    }

    pub fn diagonal_move(&mut self, direction: Diagonal) -> Outcome {
        self.translate(Motion::Diagonal(direction))
    }

    /// Parse `token` (`ne`, `northeast`, ...) and move diagonally.
    ///
    /// The battery check still comes first, so an empty battery is reported
    /// even when the token is also invalid.
    pub fn diagonal_move_token(&mut self, token: &str) -> Outcome {
        self.check_battery()?;
        let direction: Diagonal = token.parse()?;
        self.diagonal_move(direction)
    }

    fn check_battery(&self) -> Result<(), SimError> {
        match self.battery {
            Some(battery) if !battery.can_move() => Err(SimError::InsufficientBattery),
            _ => Ok(()),
        }
    }

    fn translate(&mut self, motion: Motion) -> Outcome {
        self.check_battery()?;

        let (dx, dy) = motion.offset(self.facing);
        let target = self.position.offset(dx, dy);

        if !self.is_valid_position(target) {
            let err = if self.is_obstacle(target) {
                SimError::Blocked { motion, target }
            } else {
                SimError::OutOfBounds { motion, target }
            };
            debug!(%motion, %target, reason = %err, "move rejected");
            return Err(err);
        }

        if let Some(battery) = self.battery.as_mut() {
            battery.drain();
        }
        self.position = target;
        self.record();

        debug!(
            %motion,
            x = target.x,
            y = target.y,
            battery = self.battery.map(Battery::level),
            "moved"
        );
        Ok(format!("Moved {motion} to {target}"))
    }

    fn record(&mut self) {
        self.history.push(Snapshot {
            position: self.position,
            facing: self.facing,
        });
    }

    // -- Turning --

    pub fn turn_left(&mut self) -> String {
        self.facing = self.facing.left();
        debug!(facing = %self.facing, "turned left");
        format!("Turned left, now facing {}", self.facing)
    }

    pub fn turn_right(&mut self) -> String {
        self.facing = self.facing.right();
        debug!(facing = %self.facing, "turned right");
        format!("Turned right, now facing {}", self.facing)
    }

    /// Turn right until facing `target`. At most four turns.
    pub fn turn_to_face(&mut self, target: Orientation) -> String {
        for _ in 0..Orientation::ALL.len() {
            if self.facing == target {
                break;
            }
            self.turn_right();
        }
        format!("Turned to face {}", self.facing)
    }

    /// Parse `token` (`north`, `E`, ...) and turn to face it.
    pub fn turn_to_face_token(&mut self, token: &str) -> Outcome {
        let target: Orientation = token.parse()?;
        Ok(self.turn_to_face(target))
    }

    // -- Battery --

    /// Restore the battery to full. A no-op when the battery is disabled.
    pub fn recharge(&mut self) -> String {
        match self.battery.as_mut() {
            Some(battery) => {
                battery.recharge();
                debug!("battery recharged");
                format!("Battery recharged to {}%", Battery::FULL)
            }
            None => "Battery system is disabled".to_string(),
        }
    }

    // -- Obstacles --

    /// Place an obstacle at `cell`, or remove the one already there.
    pub fn toggle_obstacle(&mut self, cell: Position) -> Outcome {
        if cell == self.position {
            return Err(SimError::ObstacleOnRobot(cell));
        }
        if !cell.within(self.size) {
            return Err(SimError::ObstacleOutsideGrid(cell));
        }
        let obstacles = self.obstacles.as_mut().ok_or(SimError::ObstaclesDisabled)?;
        let message = match obstacles.toggle(cell) {
            Toggle::Added => format!("Added obstacle at {cell}"),
            Toggle::Removed => format!("Removed obstacle at {cell}"),
        };
        debug!(%cell, count = obstacles.len(), "obstacle toggled");
        Ok(message)
    }

    pub fn clear_obstacles(&mut self) -> Outcome {
        let obstacles = self.obstacles.as_mut().ok_or(SimError::ObstaclesDisabled)?;
        obstacles.clear();
        Ok("All obstacles cleared".to_string())
    }

    /// Replace the obstacle set with the default seed. A default cell the
    /// robot currently stands on is left out.
    pub fn reset_obstacles(&mut self) -> Outcome {
        if self.obstacles.is_none() {
            return Err(SimError::ObstaclesDisabled);
        }
        self.obstacles = Some(ObstacleSet::defaults(self.size, self.position));
        Ok("Obstacles reset to default".to_string())
    }

    // -- Reporting --

    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            x: self.position.x,
            y: self.position.y,
            facing: self.facing,
            battery: self.battery.map(Battery::level),
            move_count: self.move_count(),
            obstacles: self.obstacles.as_ref().map(ObstacleSet::to_vec),
            grid_size: self.config.grid_size,
        }
    }

    /// Multi-line human-readable summary.
    #[must_use]
    pub fn status_report(&self) -> String {
        let mut lines = vec![
            "Robot Status Report:".to_string(),
            format!("Position: {}", self.position),
            format!("Facing: {}", self.facing),
            format!("Grid Size: {0}x{0}", self.config.grid_size),
        ];
        if let Some(battery) = self.battery {
            lines.push(format!("Battery: {}% ({})", battery.level(), battery.label()));
        }
        if let Some(obstacles) = &self.obstacles {
            let cells: Vec<String> = obstacles.iter().map(|c| c.to_string()).collect();
            lines.push(format!("Obstacles at: [{}]", cells.join(", ")));
        }
        lines.push(format!("Total moves: {}", self.move_count()));
        lines.join("\n")
    }

    /// Lazy row-by-row view of the grid.
    #[must_use]
    pub fn grid_view(&self) -> GridView<'_> {
        GridView::new(
            self.size,
            self.position,
            self.facing,
            self.obstacles.as_ref(),
        )
    }

    /// The grid view framed with a title and legend.
    #[must_use]
    pub fn render_grid(&self) -> String {
        let banner = "=".repeat(25);
        let mut lines = vec![
            banner.clone(),
            "   CURRENT GRID STATE".to_string(),
            banner.clone(),
        ];
        lines.extend(self.grid_view());
        lines.push(String::new());
        lines.push("Legend: ^ > v < = Robot facing direction".to_string());
        lines.push("        X = Obstacle, . = Empty space".to_string());
        lines.push(banner);
        lines.join("\n")
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::build(SimulatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulator {
        Simulator::default()
    }

    fn bare(size: u16) -> Simulator {
        Simulator::new(
            SimulatorConfig::new()
                .with_grid_size(size)
                .with_battery(false)
                .with_obstacles(false),
        )
        .unwrap()
    }

    /// Drive the robot from the origin to (2, 1) facing north.
    fn at_2_1_facing_north() -> Simulator {
        let mut s = sim();
        s.turn_right();
        s.move_forward().unwrap();
        s.move_forward().unwrap();
        s.turn_left();
        s.move_forward().unwrap();
        assert_eq!(s.position(), Position::new(2, 1));
        assert_eq!(s.facing(), Orientation::North);
        s
    }

    #[test]
    fn test_initial_state() {
        let s = sim();
        assert_eq!(s.position(), Position::ORIGIN);
        assert_eq!(s.facing(), Orientation::North);
        assert_eq!(s.battery().map(Battery::level), Some(100));
        assert_eq!(s.obstacles().map(ObstacleSet::len), Some(3));
        assert_eq!(s.move_count(), 0);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let result = Simulator::new(SimulatorConfig::new().with_grid_size(0));
        assert!(matches!(result, Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn test_forward_from_origin() {
        let mut s = sim();
        assert_eq!(s.move_forward().unwrap(), "Moved forward to (0, 1)");
        assert_eq!(s.position(), Position::new(0, 1));
        assert_eq!(s.facing(), Orientation::North);
        assert_eq!(s.move_count(), 1);
    }

    #[test]
    fn test_right_forward_forward() {
        let mut s = sim();
        assert_eq!(s.turn_right(), "Turned right, now facing EAST");
        assert_eq!(s.move_forward().unwrap(), "Moved forward to (1, 0)");
        assert_eq!(s.move_forward().unwrap(), "Moved forward to (2, 0)");
        assert_eq!(s.position(), Position::new(2, 0));
        assert_eq!(s.facing(), Orientation::East);
    }

    #[test]
    fn test_forward_into_obstacle() {
        let mut s = at_2_1_facing_north();
        let battery = s.battery();
        let moves = s.move_count();

        let err = s.move_forward().unwrap_err();
        assert_eq!(
            err,
            SimError::Blocked {
                motion: Motion::Forward,
                target: Position::new(2, 2)
            }
        );
        assert_eq!(err.to_string(), "Cannot move to (2, 2) - obstacle present");
        assert_eq!(s.position(), Position::new(2, 1));
        assert_eq!(s.battery(), battery);
        assert_eq!(s.move_count(), moves);
    }

    #[test]
    fn test_obstacle_on_grid_edge_reports_obstacle() {
        let mut s = sim();
        s.toggle_obstacle(Position::new(0, 4)).unwrap();
        for _ in 0..3 {
            s.move_forward().unwrap();
        }
        assert_eq!(s.position(), Position::new(0, 3));
        let err = s.move_forward().unwrap_err();
        assert!(matches!(err, SimError::Blocked { .. }));
        assert!(err.to_string().ends_with("obstacle present"));
    }

    #[test]
    fn test_boundary_rejection_keeps_state() {
        let mut s = sim();
        let err = s.move_backward().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot move backward to (0, -1) - outside grid boundaries"
        );
        assert_eq!(s.position(), Position::ORIGIN);
        assert_eq!(s.battery().map(Battery::level), Some(100));
        assert_eq!(s.move_count(), 0);
    }

    #[test]
    fn test_forward_then_backward_round_trip() {
        let mut s = sim();
        s.turn_right();
        let start = s.position();
        s.move_forward().unwrap();
        assert_eq!(s.move_backward().unwrap(), "Moved backward to (0, 0)");
        assert_eq!(s.position(), start);
        assert_eq!(s.battery().map(Battery::level), Some(90));
        assert_eq!(s.move_count(), 2);
    }

    #[test]
    fn test_turns_never_fail_or_drain() {
        let mut s = at_2_1_facing_north();
        let battery = s.battery();
        let position = s.position();
        let moves = s.move_count();
        for o in Orientation::ALL {
            assert_eq!(s.facing(), o);
            s.turn_right();
        }
        assert_eq!(s.facing(), Orientation::North);
        for _ in 0..7 {
            s.turn_left();
        }
        assert_eq!(s.facing(), Orientation::East);
        assert_eq!(s.battery(), battery);
        assert_eq!(s.position(), position);
        assert_eq!(s.move_count(), moves);
    }

    #[test]
    fn test_twenty_moves_then_insufficient_battery() {
        let mut s = sim();
        for i in 0..20 {
            let result = if i % 2 == 0 {
                s.move_forward()
            } else {
                s.move_backward()
            };
            assert!(result.is_ok(), "move {i} failed: {result:?}");
        }
        assert_eq!(s.battery().map(Battery::level), Some(0));
        assert_eq!(s.move_forward(), Err(SimError::InsufficientBattery));
        assert_eq!(
            s.move_forward().unwrap_err().to_string(),
            "Insufficient battery to move"
        );
        assert_eq!(s.battery().map(Battery::level), Some(0));
        assert_eq!(s.position(), Position::ORIGIN);
        assert_eq!(s.move_count(), 20);
    }

    #[test]
    fn test_insufficient_battery_wins_over_obstacle() {
        let mut s = at_2_1_facing_north();
        s.battery = Some(Battery::with_level(4));
        assert_eq!(s.move_forward(), Err(SimError::InsufficientBattery));
        assert_eq!(
            s.diagonal_move_token("bogus"),
            Err(SimError::InsufficientBattery)
        );
    }

    #[test]
    fn test_insufficient_battery_wins_over_boundary() {
        let mut s = sim();
        s.battery = Some(Battery::with_level(0));
        assert_eq!(s.move_backward(), Err(SimError::InsufficientBattery));
    }

    #[test]
    fn test_diagonal_round_trip() {
        let mut s = sim();
        assert_eq!(
            s.diagonal_move_token("ne").unwrap(),
            "Moved diagonally NE to (1, 1)"
        );
        assert_eq!(s.position(), Position::new(1, 1));
        assert_eq!(
            s.diagonal_move_token("SW").unwrap(),
            "Moved diagonally SW to (0, 0)"
        );
        assert_eq!(s.position(), Position::ORIGIN);
        assert_eq!(s.battery().map(Battery::level), Some(90));
        assert_eq!(s.move_count(), 2);
    }

    #[test]
    fn test_diagonal_rejections() {
        let mut s = sim();
        assert_eq!(
            s.diagonal_move(Diagonal::SouthWest).unwrap_err().to_string(),
            "Cannot move diagonally to (-1, -1) - outside grid boundaries"
        );

        s.diagonal_move(Diagonal::NorthEast).unwrap();
        let err = s.diagonal_move(Diagonal::NorthEast).unwrap_err();
        assert!(matches!(err, SimError::Blocked { .. }));
        assert_eq!(s.position(), Position::new(1, 1));
    }

    #[test]
    fn test_invalid_diagonal_token() {
        let mut s = sim();
        let err = s.diagonal_move_token("up").unwrap_err();
        assert!(matches!(err, SimError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid diagonal direction"));
        assert_eq!(s.position(), Position::ORIGIN);
        assert_eq!(s.battery().map(Battery::level), Some(100));
    }

    #[test]
    fn test_turn_to_face() {
        let mut s = sim();
        assert_eq!(s.turn_to_face(Orientation::West), "Turned to face WEST");
        assert_eq!(s.facing(), Orientation::West);
        assert_eq!(s.turn_to_face(Orientation::West), "Turned to face WEST");
        assert_eq!(s.facing(), Orientation::West);
        s.turn_to_face(Orientation::North);
        assert_eq!(s.facing(), Orientation::North);
        assert_eq!(s.move_count(), 0);
    }

    #[test]
    fn test_turn_to_face_token() {
        let mut s = sim();
        assert_eq!(s.turn_to_face_token("south").unwrap(), "Turned to face SOUTH");
        let err = s.turn_to_face_token("up").unwrap_err();
        assert_eq!(err.to_string(), "Invalid direction: UP");
        assert_eq!(s.facing(), Orientation::South);
    }

    #[test]
    fn test_recharge() {
        let mut s = sim();
        s.move_forward().unwrap();
        assert_eq!(s.recharge(), "Battery recharged to 100%");
        assert_eq!(s.battery().map(Battery::level), Some(100));
        assert_eq!(s.recharge(), "Battery recharged to 100%");
    }

    #[test]
    fn test_recharge_disabled_is_noop() {
        let mut s = Simulator::new(SimulatorConfig::new().with_battery(false)).unwrap();
        s.move_forward().unwrap();
        let before = s.status();
        assert_eq!(s.recharge(), "Battery system is disabled");
        assert_eq!(s.status(), before);
        assert!(s.battery().is_none());
    }

    #[test]
    fn test_moves_free_without_battery() {
        let mut s = bare(30);
        for _ in 0..25 {
            s.move_forward().unwrap();
        }
        assert_eq!(s.position(), Position::new(0, 25));
    }

    #[test]
    fn test_toggle_obstacle() {
        let mut s = sim();
        let cell = Position::new(4, 0);
        assert_eq!(s.toggle_obstacle(cell).unwrap(), "Added obstacle at (4, 0)");
        assert!(!s.is_valid_position(cell));
        assert_eq!(
            s.toggle_obstacle(cell).unwrap(),
            "Removed obstacle at (4, 0)"
        );
        assert!(s.is_valid_position(cell));
        assert_eq!(s.obstacles().map(ObstacleSet::len), Some(3));
    }

    #[test]
    fn test_toggle_on_robot_fails() {
        let mut s = sim();
        s.move_forward().unwrap();
        let err = s.toggle_obstacle(Position::new(0, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot place obstacle on robot position");
        assert_eq!(s.obstacles().map(ObstacleSet::len), Some(3));
    }

    #[test]
    fn test_toggle_outside_grid_fails() {
        let mut s = sim();
        assert_eq!(
            s.toggle_obstacle(Position::new(5, 5)),
            Err(SimError::ObstacleOutsideGrid(Position::new(5, 5)))
        );
    }

    #[test]
    fn test_obstacle_commands_when_disabled() {
        let mut s = bare(5);
        assert_eq!(
            s.toggle_obstacle(Position::new(1, 1)),
            Err(SimError::ObstaclesDisabled)
        );
        assert_eq!(s.clear_obstacles(), Err(SimError::ObstaclesDisabled));
        assert_eq!(s.reset_obstacles(), Err(SimError::ObstaclesDisabled));
        assert!(s.obstacles().is_none());
        // Without obstacles the default cells are open.
        assert!(s.is_valid_position(Position::new(2, 2)));
    }

    #[test]
    fn test_clear_and_reset_obstacles() {
        let mut s = at_2_1_facing_north();
        assert_eq!(s.clear_obstacles().unwrap(), "All obstacles cleared");
        assert_eq!(s.move_forward().unwrap(), "Moved forward to (2, 2)");

        assert_eq!(s.reset_obstacles().unwrap(), "Obstacles reset to default");
        let obstacles = s.obstacles().unwrap();
        assert_eq!(obstacles.len(), 2);
        assert!(!obstacles.contains(s.position()));
    }

    #[test]
    fn test_is_valid_position() {
        let s = sim();
        assert!(s.is_valid_position(Position::new(4, 4)));
        assert!(!s.is_valid_position(Position::new(5, 0)));
        assert!(!s.is_valid_position(Position::new(-1, 0)));
        assert!(!s.is_valid_position(Position::new(1, 3)));
    }

    #[test]
    fn test_status_report() {
        let mut s = sim();
        s.move_forward().unwrap();
        assert_eq!(
            s.status_report(),
            "Robot Status Report:\n\
             Position: (0, 1)\n\
             Facing: NORTH\n\
             Grid Size: 5x5\n\
             Battery: 95% (OK)\n\
             Obstacles at: [(1, 3), (2, 2), (3, 4)]\n\
             Total moves: 1"
        );
    }

    #[test]
    fn test_status_report_critical_and_disabled_features() {
        let mut s = sim();
        s.battery = Some(Battery::with_level(20));
        assert!(s.status_report().contains("Battery: 20% (CRITICAL)"));

        let bare = bare(3);
        let report = bare.status_report();
        assert!(!report.contains("Battery"));
        assert!(!report.contains("Obstacles"));
        assert!(report.contains("Grid Size: 3x3"));
    }

    #[test]
    fn test_status_snapshot() {
        let mut s = sim();
        s.diagonal_move(Diagonal::NorthEast).unwrap();
        let status = s.status();
        assert_eq!(status.position(), Position::new(1, 1));
        assert_eq!(status.facing, Orientation::North);
        assert_eq!(status.battery, Some(95));
        assert_eq!(status.move_count, 1);
        assert_eq!(status.grid_size, 5);
        assert_eq!(status.obstacles.map(|o| o.len()), Some(3));

        let off = bare(5).status();
        assert_eq!(off.battery, None);
        assert_eq!(off.obstacles, None);
    }

    #[test]
    fn test_history_tracks_translations_only() {
        let mut s = sim();
        s.turn_right();
        s.move_forward().unwrap();
        s.turn_left();
        let _ = s.move_backward();
        let history = s.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[1],
            Snapshot {
                position: Position::new(1, 0),
                facing: Orientation::East
            }
        );
    }

    #[test]
    fn test_render_grid_is_read_only() {
        let s = sim();
        let before = s.status();
        let rendered = s.render_grid();
        assert!(rendered.contains("CURRENT GRID STATE"));
        assert!(rendered.contains("0 | ^ . . . ."));
        assert!(rendered.contains("Legend"));
        assert_eq!(s.grid_view().count(), 7);
        assert_eq!(s.status(), before);
    }
}
