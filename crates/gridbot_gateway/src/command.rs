//! Command vocabulary.
//!
//! Commands are whitespace-separated tokens, matched case-insensitively:
//!
//! | input                         | command                     |
//! |-------------------------------|-----------------------------|
//! | `forward`, `f`                | [`Command::Forward`]        |
//! | `backward`, `back`, `b`       | [`Command::Backward`]       |
//! | `left`, `l` / `right`, `r`    | [`Command::Left`] / [`Command::Right`] |
//! | `diagonal <dir>`              | [`Command::Diagonal`]       |
//! | `face <dir>`, `turn <dir>`    | [`Command::Face`]           |
//! | `obstacle <x> <y>`            | [`Command::ToggleObstacle`] |
//! | `obstacles clear` / `reset`   | [`Command::ClearObstacles`] / [`Command::ResetObstacles`] |
//! | `recharge`, `report`, `status`, `grid`, `help`, `reset` | one each |

use std::str::FromStr;

use gridbot_core::Position;

use crate::error::GatewayError;

/// A parsed gateway command.
///
/// Direction arguments are kept as raw tokens; the simulator parses them so
/// that a bad direction is reported as an invalid direction rather than an
/// unknown command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Diagonal(String),
    Face(String),
    Recharge,
    Report,
    Status,
    Grid,
    ToggleObstacle(Position),
    ClearObstacles,
    ResetObstacles,
    Help,
    Reset,
}

impl Command {
    /// Returns `true` for commands that move or turn the robot. Interactive
    /// front ends redraw the grid after these.
    #[must_use]
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Self::Forward
                | Self::Backward
                | Self::Left
                | Self::Right
                | Self::Diagonal(_)
                | Self::Face(_)
        )
    }

    /// Returns `true` for commands that can change simulator state.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Self::Report | Self::Status | Self::Grid | Self::Help
        )
    }
}

fn coordinate(token: &str) -> Result<i32, GatewayError> {
    token
        .parse()
        .map_err(|_| GatewayError::InvalidCoordinate(token.to_string()))
}

impl FromStr for Command {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let unknown = || GatewayError::UnknownCommand(normalized.clone());

        let command = match words.as_slice() {
            ["forward" | "f"] => Self::Forward,
            ["backward" | "back" | "b"] => Self::Backward,
            ["left" | "l"] => Self::Left,
            ["right" | "r"] => Self::Right,
            ["diagonal", dir] => Self::Diagonal((*dir).to_string()),
            ["face" | "turn", dir] => Self::Face((*dir).to_string()),
            ["recharge"] => Self::Recharge,
            ["report"] => Self::Report,
            ["status"] => Self::Status,
            ["grid"] => Self::Grid,
            ["obstacle", x, y] => Self::ToggleObstacle(Position::new(coordinate(x)?, coordinate(y)?)),
            ["obstacle"] | ["obstacle", _] => return Err(GatewayError::MissingCoordinate),
            ["obstacles", "clear"] => Self::ClearObstacles,
            ["obstacles", "reset"] => Self::ResetObstacles,
            ["help"] => Self::Help,
            ["reset"] => Self::Reset,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}
