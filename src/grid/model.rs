//! Immutable occupancy grid storage.

use std::path::Path as FsPath;

use crate::error::{NavError, Result};
use crate::grid::Cell;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Walkable floor.
    Free,
    /// Wall or other obstacle.
    Blocked,
}

/// Rectangular occupancy map, read-only for the lifetime of a session.
///
/// Cells are stored row-major in a flat vector. Construction validates
/// that the source matrix is non-empty and rectangular; afterwards every
/// query is a bounds-checked array read, so a `GridModel` behind an `Arc`
/// can be shared with the planner worker without locking.
#[derive(Debug, Clone)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl GridModel {
    /// Build a grid from a matrix of small integers (0 = free, non-zero =
    /// blocked), the shape the external map source provides.
    ///
    /// Fails with [`NavError::MalformedGrid`] if the matrix is empty or
    /// any row length differs from the first.
    pub fn from_rows(source: Vec<Vec<u8>>) -> Result<Self> {
        if source.is_empty() {
            return Err(NavError::MalformedGrid("no rows".into()));
        }

        let cols = source[0].len();
        if cols == 0 {
            return Err(NavError::MalformedGrid("rows are empty".into()));
        }

        let rows = source.len();
        let mut cells = Vec::with_capacity(rows * cols);

        for (row_idx, row) in source.iter().enumerate() {
            if row.len() != cols {
                return Err(NavError::MalformedGrid(format!(
                    "row {} has {} columns, expected {}",
                    row_idx,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row.iter().map(|&v| {
                if v == 0 {
                    CellState::Free
                } else {
                    CellState::Blocked
                }
            }));
        }

        tracing::debug!(rows, cols, "grid model built");
        Ok(Self { rows, cols, cells })
    }

    /// Parse a grid from its JSON source format: an array of equal-length
    /// arrays of integers.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let source: Vec<Vec<u8>> = serde_json::from_str(json)?;
        Self::from_rows(source)
    }

    /// Load a grid from a JSON file.
    pub fn from_json_file(path: &FsPath) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Grid dimensions as `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Is this cell inside the grid?
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Is this cell inside the grid and free?
    ///
    /// Out-of-bounds cells are not walkable.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[cell.row * self.cols + cell.col] == CellState::Free
    }

    /// Cell state, or [`NavError::OutOfBounds`] for a cell outside the
    /// grid dimensions.
    pub fn state(&self, cell: Cell) -> Result<CellState> {
        if !self.in_bounds(cell) {
            return Err(NavError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[cell.row * self.cols + cell.col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small_grid() -> GridModel {
        GridModel::from_rows(vec![vec![0, 0, 1], vec![0, 1, 0], vec![0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_dimensions_and_bounds() {
        let grid = small_grid();
        assert_eq!(grid.dimensions(), (3, 3));
        assert!(grid.in_bounds(Cell::new(2, 2)));
        assert!(!grid.in_bounds(Cell::new(3, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 3)));
    }

    #[test]
    fn test_walkability() {
        let grid = small_grid();
        assert!(grid.is_walkable(Cell::new(0, 0)));
        assert!(!grid.is_walkable(Cell::new(0, 2)));
        assert!(!grid.is_walkable(Cell::new(1, 1)));
        // Out of bounds is not walkable
        assert!(!grid.is_walkable(Cell::new(5, 5)));
    }

    #[test]
    fn test_state_out_of_bounds() {
        let grid = small_grid();
        assert_eq!(grid.state(Cell::new(1, 1)).unwrap(), CellState::Blocked);

        let err = grid.state(Cell::new(3, 1)).unwrap_err();
        assert!(matches!(err, NavError::OutOfBounds { row: 3, col: 1, .. }));
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!(matches!(
            GridModel::from_rows(vec![]),
            Err(NavError::MalformedGrid(_))
        ));
        assert!(matches!(
            GridModel::from_rows(vec![vec![], vec![]]),
            Err(NavError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_jagged_source_rejected() {
        let result = GridModel::from_rows(vec![vec![0, 0, 0], vec![0, 0]]);
        match result {
            Err(NavError::MalformedGrid(msg)) => assert!(msg.contains("row 1")),
            other => panic!("expected MalformedGrid, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_json_str() {
        let grid = GridModel::from_json_str("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert!(grid.is_walkable(Cell::new(0, 0)));
        assert!(!grid.is_walkable(Cell::new(0, 1)));
    }

    #[test]
    fn test_from_json_str_jagged() {
        assert!(matches!(
            GridModel::from_json_str("[[0, 1], [0]]"),
            Err(NavError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(matches!(
            GridModel::from_json_str("not json"),
            Err(NavError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0, 0, 0], [1, 1, 0]]").unwrap();

        let grid = GridModel::from_json_file(file.path()).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert!(!grid.is_walkable(Cell::new(1, 0)));
    }
}
