//! Occupancy grid model.
//!
//! The grid is immutable for the lifetime of a navigation session: it is
//! built once from external tabular data and only queried afterwards, so
//! reads need no synchronization.

mod cell;
mod model;

pub use cell::{Cell, Direction};
pub use model::{CellState, GridModel};
