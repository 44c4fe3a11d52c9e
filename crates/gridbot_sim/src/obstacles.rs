//! Obstacle storage.
//!
//! Obstacles are kept in a `BTreeSet` so listings come out in a stable
//! `(x, y)` order regardless of the order they were placed in.

use std::collections::BTreeSet;

use gridbot_core::Position;

/// Obstacles seeded when the obstacle system is enabled.
pub const DEFAULT_OBSTACLES: [Position; 3] = [
    Position::new(2, 2),
    Position::new(3, 4),
    Position::new(1, 3),
];

/// What a [`ObstacleSet::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// The set of blocked cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: BTreeSet<Position>,
}

impl ObstacleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default seed, restricted to cells inside a `size`×`size` grid and
    /// never covering `robot`.
    #[must_use]
    pub fn defaults(size: i32, robot: Position) -> Self {
        DEFAULT_OBSTACLES
            .into_iter()
            .filter(|&cell| cell.within(size) && cell != robot)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// Add `cell` if absent, remove it if present.
    pub fn toggle(&mut self, cell: Position) -> Toggle {
        if self.cells.remove(&cell) {
            Toggle::Removed
        } else {
            self.cells.insert(cell);
            Toggle::Added
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

impl FromIterator<Position> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
