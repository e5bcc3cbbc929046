//! Cell addressing and step directions.

use serde::{Deserialize, Serialize};

/// A `(row, col)` address into the occupancy grid.
///
/// Row 0 is the top row; column 0 is the leftmost column. A cell is a
/// value type with no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Cell {
    /// Create a new cell address.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cell offset by `(dr, dc)`, or `None` if the result would go
    /// negative. Upper bounds are the grid's concern, not the cell's.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr as isize)?;
        let col = self.col.checked_add_signed(dc as isize)?;
        Some(Cell::new(row, col))
    }

    /// The direction of the single 4-connected step from `self` to
    /// `other`, or `None` if the cells are not axis-adjacent.
    pub fn direction_to(&self, other: &Cell) -> Option<Direction> {
        let dr = other.row as i64 - self.row as i64;
        let dc = other.col as i64 - self.col as i64;
        match (dr, dc) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

/// A 4-connected step direction.
///
/// Doubles as the directional feedback event emitted on successful cursor
/// advancement, consumed externally (e.g. rendered as speech).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions, in neighbor expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Row/column delta for this direction.
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Lowercase name for feedback sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
