//! # MargaNav
//!
//! Indoor grid-navigation engine for tap-driven wayfinding on a binary
//! occupancy grid.
//!
//! ## Overview
//!
//! MargaNav covers the algorithmic core of an indoor navigation screen:
//!
//! - **Occupancy grid**: immutable `rows x cols` map of Free/Blocked cells,
//!   loaded from a rectangular matrix or its JSON source format
//! - **Path planning**: A* shortest-path search over 4-connected neighbors
//!   with unit step cost and Manhattan heuristic
//! - **Coordinate mapping**: bidirectional cell/pixel transforms under
//!   90-degree-multiple rotation, pan, zoom, and aspect-fit letterboxing
//! - **Session control**: endpoint selection with tap debounce, off-thread
//!   path recomputation with supersede semantics, and gated step-by-step
//!   traversal with directional feedback events
//!
//! Camera capture, inference, speech output, and rendering are external
//! collaborators: the engine consumes resolved pixel positions and produces
//! snapshots and feedback events for them.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Instant;
//! use marga_nav::{EngineConfig, GridModel, NavEvent, NavigationController};
//!
//! let grid = Arc::new(GridModel::from_rows(vec![
//!     vec![0, 0, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 0],
//! ]).unwrap());
//!
//! let mut controller = NavigationController::new(grid, EngineConfig::default());
//! controller.apply(NavEvent::tap(marga_nav::Cell::new(0, 0), Instant::now()));
//! ```
//!
//! ## Coordinate System
//!
//! Grid cells are addressed as `(row, col)` with row 0 at the top. Pixel
//! coordinates are view-local with the origin at the top-left corner and
//! y growing downward.

#![warn(missing_docs)]

// Error types
pub mod error;

// Configuration loading
pub mod config;

// Occupancy grid model
pub mod grid;

// A* path planning
pub mod planning;

// Cell/pixel coordinate mapping
pub mod view;

// Navigation session state machine and planner worker
pub mod session;

pub use config::{EngineConfig, PlannerConfig, SessionConfig, ViewConfig};
pub use error::{NavError, Result};
pub use grid::{Cell, CellState, Direction, GridModel};
pub use planning::{Path, PathFinder};
pub use session::{
    NavEvent, NavPhase, NavSnapshot, NavigationController, PlanOutcome, PlanRequest, PlannerHandle,
};
pub use view::{GridSurface, MapSurface, PixelPoint, PixelRect, Rotation, Viewport};
