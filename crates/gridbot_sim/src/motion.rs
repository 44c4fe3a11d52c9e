//! Translational moves.

use std::fmt;

use gridbot_core::{Diagonal, Orientation};

/// A move that changes the robot's position (as opposed to a turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Forward,
    Backward,
    Diagonal(Diagonal),
}

impl Motion {
    /// The `(dx, dy)` displacement of this move for a robot facing `facing`.
    /// Diagonal moves ignore the facing.
    #[must_use]
    pub const fn offset(self, facing: Orientation) -> (i32, i32) {
        match self {
            Self::Forward => facing.step(),
            Self::Backward => {
                let (dx, dy) = facing.step();
                (-dx, -dy)
            }
            Self::Diagonal(d) => d.offset(),
        }
    }

    /// Phrase used in rejection messages: "Cannot {attempt} to ...".
    #[must_use]
    pub const fn attempt(self) -> &'static str {
        match self {
            Self::Forward => "move",
            Self::Backward => "move backward",
            Self::Diagonal(_) => "move diagonally",
        }
    }
}

/// Renders the adverb used in success messages, e.g. `diagonally NE`.
impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
            Self::Diagonal(d) => write!(f, "diagonally {d}"),
        }
    }
}
