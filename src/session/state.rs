//! Session state types.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction};
use crate::planning::Path;

/// Navigation session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavPhase {
    /// No start, no end.
    #[default]
    Idle,

    /// Start chosen, end unset.
    StartSet,

    /// Both endpoints set and distinct.
    ///
    /// Transient when a planner worker is attached: issuing the
    /// recompute request moves the session straight to `PathPending`.
    Ready,

    /// Recompute in flight.
    PathPending,

    /// Non-empty path committed, cursor at the start.
    HasPath,

    /// The last search exhausted without reaching the end. A normal
    /// terminal state, not an error.
    Unreachable,
}

impl NavPhase {
    /// String form for status reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavPhase::Idle => "IDLE",
            NavPhase::StartSet => "START_SET",
            NavPhase::Ready => "READY",
            NavPhase::PathPending => "PATH_PENDING",
            NavPhase::HasPath => "HAS_PATH",
            NavPhase::Unreachable => "UNREACHABLE",
        }
    }
}

/// Mutable state held for the user-facing interaction.
///
/// Mutated only by the [`NavigationController`](crate::NavigationController)
/// in response to events; the planner worker never touches it directly.
#[derive(Debug, Clone, Default)]
pub struct NavigationSession {
    /// Selected start cell.
    pub start: Option<Cell>,
    /// Selected end cell.
    pub end: Option<Cell>,
    /// Most recently committed path (empty when none or unreachable).
    pub path: Path,
    /// Index into `path`; meaningful only while `path` is non-empty.
    pub cursor: usize,
    /// Monotonically increasing counter identifying the most recent
    /// recompute request. Results tagged with an older generation are
    /// stale and discarded.
    pub generation: u64,
}

/// Immutable view of the session after applying one event.
///
/// The renderer diffs consecutive snapshots; there is no implicit
/// redraw-on-mutation coupling.
#[derive(Debug, Clone)]
pub struct NavSnapshot {
    /// Session phase after the event.
    pub phase: NavPhase,
    /// Selected start cell.
    pub start: Option<Cell>,
    /// Selected end cell.
    pub end: Option<Cell>,
    /// Committed path (empty when none).
    pub path: Path,
    /// Cursor index, present only while a non-empty path is committed.
    pub cursor: Option<usize>,
    /// Directional feedback fired by a successful step, for the external
    /// feedback sink (speech or text).
    pub feedback: Option<Direction>,
    /// Generation of the most recent recompute request.
    pub generation: u64,
}

impl NavSnapshot {
    /// The cell the cursor is on, if a path is committed.
    pub fn current(&self) -> Option<Cell> {
        self.cursor.and_then(|i| self.path.get(i))
    }
}
