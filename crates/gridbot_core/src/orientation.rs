//! Cardinal orientation and the turn cycle.
//!
//! The four facings form a cycle of length 4: turning right advances the
//! cycle by one step, turning left moves it back by one.
//!
//! ```text
//! NORTH → EAST → SOUTH → WEST → NORTH
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The direction the robot is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting at [`Orientation::North`].
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this orientation in the clockwise cycle (`0..4`).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Orientation at `index` in the cycle, taken modulo 4.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The orientation after a clockwise quarter turn.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The orientation after a counter-clockwise quarter turn.
    #[must_use]
    pub const fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit step `(dx, dy)` taken when moving forward in this orientation.
    /// North is `+y`.
    #[must_use]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Upper-case name, e.g. `"NORTH"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Glyph used when drawing the robot on the grid.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    /// Parse a full name or initial, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "east" | "e" => Ok(Self::East),
            "south" | "s" => Ok(Self::South),
            "west" | "w" => Ok(Self::West),
            _ => Err(ParseError::InvalidOrientation(s.trim().to_uppercase())),
        }
    }
}
