//! Structured snapshot of the query surface.

use gridbot_core::{Orientation, Position};
use serde::{Deserialize, Serialize};

/// Read-only view of the simulator, shaped for JSON clients.
///
/// Disabled features serialise as `null`, so a disabled battery can never be
/// mistaken for a full one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub x: i32,
    pub y: i32,
    pub facing: Orientation,
    pub battery: Option<u8>,
    pub move_count: usize,
    pub obstacles: Option<Vec<Position>>,
    pub grid_size: u16,
}

impl Status {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}
