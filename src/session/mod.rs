//! Navigation session state machine and planner worker.
//!
//! The [`NavigationController`] is the single writer of session state: it
//! consumes explicit events (taps, steps, resets, tagged plan results)
//! and returns immutable snapshots for the renderer to diff. The path
//! search itself runs on the [`PlannerHandle`] worker thread so endpoint
//! selection stays responsive.

mod controller;
mod state;
mod worker;

pub use controller::{NavEvent, NavigationController};
pub use state::{NavPhase, NavSnapshot, NavigationSession};
pub use worker::{PlanOutcome, PlanRequest, PlannerHandle};
