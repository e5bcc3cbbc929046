//! Planner worker thread.
//!
//! Path searches run here so they never block input handling. The worker
//! drains its request queue down to the newest entry before searching, so
//! a burst of endpoint changes costs at most one wasted search; the
//! generation check on the controller side remains authoritative for
//! discarding stale results.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::config::PlannerConfig;
use crate::grid::{Cell, GridModel};
use crate::planning::{Path, PathFinder};

/// A generation-tagged search request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Generation assigned by the controller.
    pub generation: u64,
    /// Grid to search; shared read-only with the session.
    pub grid: Arc<GridModel>,
    /// Start cell.
    pub start: Cell,
    /// End cell.
    pub end: Cell,
}

/// A completed search, tagged with the generation of its request.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Generation of the originating request.
    pub generation: u64,
    /// Resulting path (empty when unreachable).
    pub path: Path,
}

/// Handle to the planner worker thread.
///
/// Dropping the handle closes the request channel, which stops the
/// worker; the thread is joined on drop.
pub struct PlannerHandle {
    request_tx: Option<Sender<PlanRequest>>,
    result_rx: Receiver<PlanOutcome>,
    thread: Option<JoinHandle<()>>,
}

impl PlannerHandle {
    /// Spawn the planner worker.
    pub fn spawn(config: PlannerConfig) -> Self {
        let (request_tx, request_rx) = unbounded();
        let (result_tx, result_rx) = unbounded();

        let thread = thread::Builder::new()
            .name("marga-planner".into())
            .spawn(move || run_worker(request_rx, result_tx, config))
            .expect("failed to spawn planner thread");

        Self {
            request_tx: Some(request_tx),
            result_rx,
            thread: Some(thread),
        }
    }

    /// Submit a search request. Never blocks.
    pub fn submit(&self, request: PlanRequest) {
        if let Some(tx) = &self.request_tx {
            if tx.send(request).is_err() {
                tracing::warn!("planner worker has stopped, request dropped");
            }
        }
    }

    /// Take one completed search, if any. Never blocks.
    pub fn try_recv(&self) -> Option<PlanOutcome> {
        self.result_rx.try_recv().ok()
    }
}

impl Drop for PlannerHandle {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.request_tx.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_worker(
    request_rx: Receiver<PlanRequest>,
    result_tx: Sender<PlanOutcome>,
    config: PlannerConfig,
) {
    let finder = PathFinder::new(config);
    tracing::debug!("planner worker started");

    while let Ok(mut request) = request_rx.recv() {
        // Keep only the newest pending request
        while let Ok(newer) = request_rx.try_recv() {
            tracing::debug!(
                superseded = request.generation,
                by = newer.generation,
                "dropping superseded plan request"
            );
            request = newer;
        }

        let path = finder.find_path(&request.grid, request.start, request.end);
        tracing::debug!(
            generation = request.generation,
            cells = path.len(),
            "plan complete"
        );

        let outcome = PlanOutcome {
            generation: request.generation,
            path,
        };
        if result_tx.send(outcome).is_err() {
            break;
        }
    }

    tracing::debug!("planner worker stopped");
}
