//! Grid coordinates and movement directions

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cell on the playfield. Valid range is `[0, cols) x [0, rows)`; y grows downward.
pub type GridPosition = IVec2;

/// Whether a position lies inside a `cols x rows` board
#[inline]
pub fn in_bounds(pos: GridPosition, cols: i32, rows: i32) -> bool {
    pos.x >= 0 && pos.x < cols && pos.y >= 0 && pos.y < rows
}

/// One of the four unit moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Same axis, opposite sign
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}
