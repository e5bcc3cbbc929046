//! Grid rotation by 90-degree multiples.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// Rotation of the logical grid into draw space.
///
/// Fixed per screen orientation mode; the tables here are the single
/// source of truth for both the forward (render) and inverse (tap)
/// pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// Quarter turn clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three-quarter turn clockwise.
    Deg270,
}

impl Rotation {
    /// All supported rotations.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Parse a rotation from whole degrees (any multiple of 90).
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Draw-space extent `(draw_rows, draw_cols)` of a `rows x cols` grid
    /// under this rotation.
    pub fn rotated_extent(&self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => (rows, cols),
            Rotation::Deg90 | Rotation::Deg270 => (cols, rows),
        }
    }

    /// Map a logical cell to its `(draw_row, draw_col)` position.
    pub fn to_draw(&self, cell: Cell, rows: usize, cols: usize) -> (usize, usize) {
        let (row, col) = (cell.row, cell.col);
        match self {
            Rotation::Deg0 => (row, col),
            Rotation::Deg90 => (col, rows - 1 - row),
            Rotation::Deg180 => (rows - 1 - row, cols - 1 - col),
            Rotation::Deg270 => (cols - 1 - col, row),
        }
    }

    /// Map a `(draw_row, draw_col)` position back to the logical cell.
    /// Exact inverse of [`Rotation::to_draw`].
    pub fn from_draw(&self, draw_row: usize, draw_col: usize, rows: usize, cols: usize) -> Cell {
        match self {
            Rotation::Deg0 => Cell::new(draw_row, draw_col),
            Rotation::Deg90 => Cell::new(rows - 1 - draw_col, draw_row),
            Rotation::Deg180 => Cell::new(rows - 1 - draw_row, cols - 1 - draw_col),
            Rotation::Deg270 => Cell::new(draw_col, cols - 1 - draw_row),
        }
    }
}
