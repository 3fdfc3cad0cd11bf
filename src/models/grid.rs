use std::collections::HashSet;

use crate::models::Position;

/// Neighbour offsets in priority order: up, down, left, right.
/// Every strategy depends on this order for its trace.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A validated rectangular grid with its blocked cells.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub walls: HashSet<Position>,
}

impl Grid {
    pub fn new(rows: i32, cols: i32, walls: impl IntoIterator<Item = Position>) -> Self {
        Self {
            rows,
            cols,
            walls: walls.into_iter().collect(),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0 && position.row < self.rows && position.col >= 0 && position.col < self.cols
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }

    /// In-bounds neighbours of `position` in [`DIRECTIONS`] order.
    /// Walls are not filtered here.
    pub fn neighbors(&self, position: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(DIRECTIONS.len());
        for (dr, dc) in DIRECTIONS {
            let candidate = Position::new(position.row + dr, position.col + dc);
            if self.contains(candidate) {
                neighbors.push(candidate);
            }
        }
        neighbors
    }
}
