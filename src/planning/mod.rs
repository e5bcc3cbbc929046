//! A* path planning over the occupancy grid.

mod astar;
mod path;

pub use astar::PathFinder;
pub use path::Path;
