//! Parallel and Concurrent, the tick-everything composites.
//!
//! Both run all children "at once" within the single-threaded tick and
//! resolve the tallied outcomes against a per-composite [`Mode`] pair. They
//! differ in bookkeeping: [`Parallel`] accumulates results across a whole
//! run and stops re-ticking finished children, while [`Concurrent`] re-ticks
//! everything and judges each tick in isolation.

use crate::composite::{Mode, abort_all, decide, dispose_all, initialize_all};
use crate::{Context, Node, Status};

/// Tallies a child result into the success/failure counters, or
/// short-circuits with `Error`.
fn tally(status: Status, successes: &mut usize, failures: &mut usize) -> Option<Status> {
    match status {
        Status::Success => *successes += 1,
        Status::Failure => *failures += 1,
        Status::Running => {}
        Status::Error => return Some(Status::Error),
        Status::Idle | Status::Aborted => {
            tracing::error!(%status, "child tick produced a non-result status");
            return Some(Status::Error);
        }
    }
    None
}

/// Runs all children across the run, tallying results cumulatively.
///
/// # Semantics
///
/// On the first tick of a run every child is ticked unconditionally. On
/// subsequent ticks only children still `Running` are ticked: finished
/// children keep their tallied result and are not re-run. The cumulative
/// success/failure counters are resolved against the configured
/// [`Mode`] pair each tick:
///
/// - success mode `Any`: one successful child is enough; `All`: the
///   cumulative count must reach the child count.
/// - failure mode works the same way on the failure counter.
/// - if every child has finished and neither threshold was met, the outcome
///   is ambiguous and reported as `Error`.
///
/// A child `Error` propagates immediately. Whenever the composite stops
/// being `Running` (any terminal outcome), every child is aborted
/// unconditionally, so no orphaned work survives the cycle.
pub struct Parallel<B> {
    children: Vec<Box<dyn Node<B>>>,
    success_mode: Mode,
    failure_mode: Mode,
    successes: usize,
    failures: usize,
    first_tick: bool,
    status: Status,
}

impl<B> Parallel<B> {
    /// Creates a parallel composite with the given threshold modes.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(success_mode: Mode, failure_mode: Mode, children: Vec<Box<dyn Node<B>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Parallel must have at least one child"
        );
        Self {
            children,
            success_mode,
            failure_mode,
            successes: 0,
            failures: 0,
            first_tick: true,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Parallel<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.successes = 0;
        self.failures = 0;
        self.first_tick = true;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let first = self.first_tick;
        self.first_tick = false;

        for child in &mut self.children {
            // After the opening tick, finished children are skipped; their
            // result is already in the counters.
            if !first && child.status() != Status::Running {
                continue;
            }
            if let Some(error) = tally(child.tick(ctx), &mut self.successes, &mut self.failures) {
                return error;
            }
        }

        decide(
            self.success_mode,
            self.failure_mode,
            self.successes,
            self.failures,
            self.children.len(),
        )
    }

    fn on_end(&mut self, ctx: &mut Context<B>) {
        abort_all(&mut self.children, ctx);
    }

    fn initialize_children(&mut self, ctx: &mut Context<B>) {
        initialize_all(&mut self.children, ctx);
    }

    fn abort_children(&mut self, ctx: &mut Context<B>) {
        abort_all(&mut self.children, ctx);
    }

    fn dispose_children(&mut self, ctx: &mut Context<B>) {
        dispose_all(&mut self.children, ctx);
    }
}

/// Runs all children every tick, judging each tick in isolation.
///
/// # Semantics
///
/// Same [`Mode`] pair as [`Parallel`], but there is no cross-tick
/// accumulation: every child is ticked on every tick (finished children
/// included; they simply begin a new cycle), and the tallies cover that one
/// tick only. Under `All`, "all children matched" therefore means *within
/// the same tick*. A child `Error` propagates immediately, and any terminal
/// outcome aborts every child unconditionally.
pub struct Concurrent<B> {
    children: Vec<Box<dyn Node<B>>>,
    success_mode: Mode,
    failure_mode: Mode,
    status: Status,
}

impl<B> Concurrent<B> {
    /// Creates a concurrent composite with the given threshold modes.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(success_mode: Mode, failure_mode: Mode, children: Vec<Box<dyn Node<B>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Concurrent must have at least one child"
        );
        Self {
            children,
            success_mode,
            failure_mode,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Concurrent<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let mut successes = 0;
        let mut failures = 0;

        for child in &mut self.children {
            if let Some(error) = tally(child.tick(ctx), &mut successes, &mut failures) {
                return error;
            }
        }

        decide(
            self.success_mode,
            self.failure_mode,
            successes,
            failures,
            self.children.len(),
        )
    }

    fn on_end(&mut self, ctx: &mut Context<B>) {
        abort_all(&mut self.children, ctx);
    }

    fn initialize_children(&mut self, ctx: &mut Context<B>) {
        initialize_all(&mut self.children, ctx);
    }

    fn abort_children(&mut self, ctx: &mut Context<B>) {
        abort_all(&mut self.children, ctx);
    }

    fn dispose_children(&mut self, ctx: &mut Context<B>) {
        dispose_all(&mut self.children, ctx);
    }
}
