//! Grid coordinates.
//!
//! A [`Position`] is a signed `(x, y)` pair. The robot only ever occupies
//! in-grid cells, but candidate targets one step off the edge must still be
//! representable, so coordinates are signed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the grid. `x` grows east, `y` grows north.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`. Saturates instead of overflowing.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns `true` if both coordinates lie in `0..size`.
    #[must_use]
    pub const fn within(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
