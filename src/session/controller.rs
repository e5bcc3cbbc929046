//! Navigation session controller.
//!
//! The controller owns the session and applies explicit events to it:
//! every mutation goes through [`NavigationController::apply`], which
//! returns a [`NavSnapshot`] for the renderer to diff. Path recomputation
//! is handed to the planner worker tagged with a generation counter;
//! whatever comes back with a stale generation is dropped.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::grid::{Cell, Direction, GridModel};
use crate::planning::Path;
use crate::session::{NavPhase, NavSnapshot, NavigationSession, PlanRequest, PlannerHandle};
use crate::view::{GridSurface, PixelPoint};

/// An input event for the navigation session.
#[derive(Debug, Clone)]
pub enum NavEvent {
    /// A tap resolved to a grid cell, with its arrival time for
    /// debouncing. The timestamp must come from a monotonic clock.
    Tap {
        /// The tapped cell.
        cell: Cell,
        /// Arrival time of the tap.
        at: Instant,
    },

    /// Clear start, end, path, and cursor from any phase.
    Reset,

    /// Request advancing the cursor one step in a direction.
    Step {
        /// Requested direction.
        direction: Direction,
    },

    /// A completed search returned by the planner worker.
    PlanResult {
        /// Generation of the originating request.
        generation: u64,
        /// Resulting path.
        path: Path,
    },
}

impl NavEvent {
    /// Shorthand for a tap event.
    pub fn tap(cell: Cell, at: Instant) -> Self {
        NavEvent::Tap { cell, at }
    }
}

/// Session state machine orchestrating endpoint selection, debounced and
/// cancellable path recomputation, and gated step-by-step traversal.
///
/// Single-writer: only the thread driving the controller mutates session
/// state. The planner worker communicates exclusively through
/// generation-tagged results, applied here via [`NavEvent::PlanResult`].
pub struct NavigationController {
    grid: Arc<GridModel>,
    session: NavigationSession,
    phase: NavPhase,
    debounce: Duration,
    last_tap: Option<Instant>,
    planner: PlannerHandle,
}

impl NavigationController {
    /// Create a controller for a grid, spawning its planner worker.
    pub fn new(grid: Arc<GridModel>, config: EngineConfig) -> Self {
        Self {
            grid,
            session: NavigationSession::default(),
            phase: NavPhase::Idle,
            debounce: Duration::from_millis(config.session.tap_debounce_ms),
            last_tap: None,
            planner: PlannerHandle::spawn(config.planner),
        }
    }

    /// The grid this session navigates.
    pub fn grid(&self) -> &Arc<GridModel> {
        &self.grid
    }

    /// Current phase.
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Apply one event and return the resulting snapshot.
    pub fn apply(&mut self, event: NavEvent) -> NavSnapshot {
        let feedback = match event {
            NavEvent::Tap { cell, at } => {
                self.handle_tap(cell, at);
                None
            }
            NavEvent::Reset => {
                self.handle_reset();
                None
            }
            NavEvent::Step { direction } => self.handle_step(direction),
            NavEvent::PlanResult { generation, path } => {
                self.commit_plan(generation, path);
                None
            }
        };
        self.snapshot(feedback)
    }

    /// Resolve a tap's pixel position through the grid surface and apply
    /// it. Taps outside the grid area are no-ops.
    pub fn tap_pixel(&mut self, surface: &GridSurface, point: PixelPoint, at: Instant) -> NavSnapshot {
        match surface.pixel_to_cell(point) {
            Some(cell) => self.apply(NavEvent::tap(cell, at)),
            None => {
                tracing::debug!(x = point.x, y = point.y, "tap outside grid area ignored");
                self.snapshot(None)
            }
        }
    }

    /// Drain any completed searches from the worker and return the
    /// resulting snapshot. Never blocks.
    pub fn poll(&mut self) -> NavSnapshot {
        while let Some(outcome) = self.planner.try_recv() {
            self.commit_plan(outcome.generation, outcome.path);
        }
        self.snapshot(None)
    }

    /// Current snapshot without applying an event.
    pub fn snapshot_now(&self) -> NavSnapshot {
        self.snapshot(None)
    }

    fn handle_tap(&mut self, cell: Cell, at: Instant) {
        if !self.grid.in_bounds(cell) {
            tracing::debug!(?cell, "out-of-bounds tap ignored");
            return;
        }

        // Absorb duplicate touch events
        if let Some(last) = self.last_tap {
            if at.saturating_duration_since(last) < self.debounce {
                tracing::debug!(?cell, "tap within debounce window ignored");
                return;
            }
        }
        self.last_tap = Some(at);

        match (self.session.start, self.session.end) {
            (None, _) => {
                self.session.start = Some(cell);
            }
            (Some(start), None) => {
                if cell == start {
                    return;
                }
                self.session.end = Some(cell);
            }
            (Some(start), Some(end)) => {
                // Reassign whichever endpoint is nearer; ties favor start
                let to_start = cell.manhattan_distance(&start);
                let to_end = cell.manhattan_distance(&end);

                if to_start <= to_end {
                    self.session.start = Some(cell);
                    if self.session.end == Some(cell) {
                        self.session.end = None;
                    }
                } else {
                    self.session.end = Some(cell);
                    if self.session.start == Some(cell) {
                        // The endpoints would be equal; keep the surviving
                        // one as the start so the session is back to
                        // picking an end.
                        self.session.start = self.session.end.take();
                    }
                }
            }
        }

        self.after_endpoint_change();
    }

    fn after_endpoint_change(&mut self) {
        // Any endpoint change invalidates the current path
        self.session.path = Path::empty();
        self.session.cursor = 0;

        match (self.session.start, self.session.end) {
            (Some(start), Some(end)) if start != end => {
                self.phase = NavPhase::Ready;
                self.request_plan(start, end);
            }
            (Some(_), _) => self.phase = NavPhase::StartSet,
            _ => self.phase = NavPhase::Idle,
        }
    }

    fn request_plan(&mut self, start: Cell, end: Cell) {
        self.session.generation += 1;
        self.phase = NavPhase::PathPending;
        tracing::debug!(
            generation = self.session.generation,
            ?start,
            ?end,
            "path recompute requested"
        );
        self.planner.submit(PlanRequest {
            generation: self.session.generation,
            grid: Arc::clone(&self.grid),
            start,
            end,
        });
    }

    fn commit_plan(&mut self, generation: u64, path: Path) {
        if generation != self.session.generation {
            tracing::debug!(
                generation,
                current = self.session.generation,
                "stale plan result discarded"
            );
            return;
        }
        if self.phase != NavPhase::PathPending {
            // Session moved on (e.g. reset) since the request
            return;
        }

        self.phase = if path.is_empty() {
            NavPhase::Unreachable
        } else {
            NavPhase::HasPath
        };
        self.session.path = path;
        self.session.cursor = 0;
    }

    fn handle_step(&mut self, direction: Direction) -> Option<Direction> {
        if self.phase != NavPhase::HasPath {
            return None;
        }

        // Advance only along the computed path, never off it
        if self.session.path.step_direction(self.session.cursor) == Some(direction) {
            self.session.cursor += 1;
            Some(direction)
        } else {
            None
        }
    }

    fn handle_reset(&mut self) {
        // Bump the generation so a still-running search cannot resurrect
        // a path into the cleared session.
        self.session.generation += 1;
        self.session.start = None;
        self.session.end = None;
        self.session.path = Path::empty();
        self.session.cursor = 0;
        self.phase = NavPhase::Idle;
        tracing::debug!("session reset");
    }

    fn snapshot(&self, feedback: Option<Direction>) -> NavSnapshot {
        NavSnapshot {
            phase: self.phase,
            start: self.session.start,
            end: self.session.end,
            path: self.session.path.clone(),
            cursor: if self.session.path.is_empty() {
                None
            } else {
                Some(self.session.cursor)
            },
            feedback,
            generation: self.session.generation,
        }
    }
}
