//! Path types for navigation.
//!
//! A [`Path`] is the output of the A* planner: the ordered cells from
//! start to end inclusive. An empty path means the goal was unreachable;
//! that is valid output data, not a failure.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction};

/// An ordered sequence of cells from start to end inclusive.
///
/// Immutable once produced. Every consecutive pair differs by exactly one
/// 4-connected step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap a cell sequence as a path.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The empty path (no route exists).
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no route exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells (one more than the number of steps).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `index`, if within the path.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// First cell (the start), if any.
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell (the end), if any.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// All cells, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Direction of the step leaving `index`, or `None` when `index + 1`
    /// is past the end of the path.
    pub fn step_direction(&self, index: usize) -> Option<Direction> {
        let from = self.get(index)?;
        let to = self.get(index + 1)?;
        from.direction_to(&to)
    }

    /// True when every consecutive pair of cells differs by exactly one
    /// 4-connected step. An empty or single-cell path is contiguous.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .windows(2)
            .all(|pair| pair[0].direction_to(&pair[1]).is_some())
    }
}
