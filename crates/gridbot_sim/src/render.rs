//! ASCII grid view.
//!
//! [`GridView`] walks the grid lazily, yielding one line per row from the
//! top (highest `y`) down, followed by the x-axis rule and labels:
//!
//! ```text
//! 4 | . . . X .
//! 3 | . X . . .
//! 2 | . . X . .
//! 1 | . . . . .
//! 0 | ^ . . . .
//!   +----------
//!   | 0 1 2 3 4
//! ```

use std::iter::FusedIterator;

use gridbot_core::{Orientation, Position};

use crate::obstacles::ObstacleSet;

const OBSTACLE: char = 'X';
const EMPTY: char = '.';

#[derive(Debug, Clone, Copy)]
enum Stage {
    Row(i32),
    Labels,
    Done,
}

/// Borrowing iterator over the text lines of a grid snapshot.
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    size: i32,
    robot: Position,
    facing: Orientation,
    obstacles: Option<&'a ObstacleSet>,
    label_width: usize,
    stage: Stage,
}

impl<'a> GridView<'a> {
    pub(crate) fn new(
        size: i32,
        robot: Position,
        facing: Orientation,
        obstacles: Option<&'a ObstacleSet>,
    ) -> Self {
        Self {
            size,
            robot,
            facing,
            obstacles,
            label_width: (size - 1).max(0).to_string().len(),
            stage: Stage::Row(size - 1),
        }
    }

    fn cell(&self, cell: Position) -> char {
        if cell == self.robot {
            self.facing.glyph()
        } else if self.obstacles.is_some_and(|o| o.contains(cell)) {
            OBSTACLE
        } else {
            EMPTY
        }
    }

    fn row(&self, y: i32) -> String {
        let cells: Vec<String> = (0..self.size)
            .map(|x| self.cell(Position::new(x, y)).to_string())
            .collect();
        format!("{y:>w$} | {}", cells.join(" "), w = self.label_width)
    }
}

impl Iterator for GridView<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (line, next) = match self.stage {
            Stage::Row(y) if y >= 0 => (self.row(y), Stage::Row(y - 1)),
            Stage::Row(_) => {
                let rule = "-".repeat(self.size as usize * 2);
                (
                    format!("{:w$} +{rule}", "", w = self.label_width),
                    Stage::Labels,
                )
            }
            Stage::Labels => {
                // Single digit per column keeps labels aligned on wide grids.
                let labels: Vec<String> = (0..self.size).map(|x| (x % 10).to_string()).collect();
                (
                    format!("{:w$} | {}", "", labels.join(" "), w = self.label_width),
                    Stage::Done,
                )
            }
            Stage::Done => return None,
        };
        self.stage = next;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.stage {
            Stage::Row(y) => (y.max(-1) + 1) as usize + 2,
            Stage::Labels => 1,
            Stage::Done => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridView<'_> {}
impl FusedIterator for GridView<'_> {}
