//! Core node protocol.
//!
//! This module defines [`Node`], the lifecycle/tick/abort protocol every tree
//! node implements, and [`Context`], the value threaded through every
//! lifecycle call (the shared blackboard plus the engine clock).
//!
//! # Protocol
//!
//! A node moves through a small state machine, driven by the provided
//! methods of the trait:
//!
//! ```text
//! Idle ──tick──▶ Running ──tick──▶ Success | Failure | Error
//!                   │
//!                 abort
//!                   ▼
//!                Aborted
//! ```
//!
//! [`Node::tick`] brackets the overridable `execute` hook with `on_begin`
//! (only when the node is not resuming from `Running`) and `on_end` (only
//! when the tick produced a non-`Running` result). This bracketing is what
//! lets a node suspend and resume transparently: a node left `Running` skips
//! `on_begin` on the next tick and continues from whatever progress its
//! fields persisted.
//!
//! Lifecycle cascades are strictly ordered: `initialize` is pre-order (self
//! before children), `dispose` and the recursive abort inside `abort` are
//! post-order (children before self).

use crate::Status;

/// Execution context handed to every lifecycle call.
///
/// Owns the shared blackboard and the engine clock. The clock is a monotonic
/// `f64` counter; [`crate::TreeRoot`] advances it by one per tick, and
/// embedders that track wall-clock time can overwrite it with
/// [`Context::set_time`] before ticking.
pub struct Context<B> {
    /// The shared state store, readable and writable by every node.
    pub blackboard: B,
    time: f64,
}

impl<B> Context<B> {
    /// Creates a context around the given blackboard with the clock at zero.
    pub fn new(blackboard: B) -> Self {
        Self {
            blackboard,
            time: 0.0,
        }
    }

    /// Current value of the engine clock.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Overwrites the engine clock.
    ///
    /// The clock is expected to be monotonic; rewinding it confuses any
    /// in-flight cooldown or limit decorator.
    #[inline]
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Advances the engine clock by `delta`.
    #[inline]
    pub fn advance(&mut self, delta: f64) {
        self.time += delta;
    }
}

/// A behavior tree node.
///
/// Implementors provide `execute` (the per-tick work), the status accessors,
/// and override whichever hooks and cascade points they need. The provided
/// `initialize`/`tick`/`abort`/`dispose` drivers implement the protocol and
/// should not be overridden.
///
/// # Hooks
///
/// - `on_initialize`: one-time setup, before any tick.
/// - `on_begin`: opening work for a fresh cycle (reset persisted progress).
/// - `execute`: the step function; must return `Success`, `Running`,
///   `Failure`, or `Error`.
/// - `on_end`: closing work, runs whenever a tick leaves the node
///   non-`Running`.
/// - `on_abort`: cancellation cleanup, runs after all children have been
///   aborted.
/// - `on_dispose`: one-time teardown, after all children are disposed.
///
/// # Cascade points
///
/// Leaves keep the no-op defaults; composites and decorators override
/// `initialize_children`, `abort_children`, and `dispose_children` to forward
/// the respective call to their children.
pub trait Node<B>: Send {
    /// Current status of this node.
    fn status(&self) -> Status;

    /// Stores a new status. Implementations simply write the field; the
    /// protocol drivers decide what to store.
    fn set_status(&mut self, status: Status);

    /// Per-tick work. Must return a valid result status.
    fn execute(&mut self, ctx: &mut Context<B>) -> Status;

    /// One-time setup hook.
    fn on_initialize(&mut self, _ctx: &mut Context<B>) {}

    /// Opening hook for a fresh execution cycle.
    fn on_begin(&mut self, _ctx: &mut Context<B>) {}

    /// Closing hook, invoked whenever a tick produces a non-`Running` status.
    fn on_end(&mut self, _ctx: &mut Context<B>) {}

    /// Cancellation hook, invoked after all children have been aborted.
    fn on_abort(&mut self, _ctx: &mut Context<B>) {}

    /// One-time teardown hook.
    fn on_dispose(&mut self, _ctx: &mut Context<B>) {}

    /// Forwards `initialize` to children. No-op for leaves.
    fn initialize_children(&mut self, _ctx: &mut Context<B>) {}

    /// Forwards `abort` to children. No-op for leaves.
    fn abort_children(&mut self, _ctx: &mut Context<B>) {}

    /// Forwards `dispose` to children. No-op for leaves.
    fn dispose_children(&mut self, _ctx: &mut Context<B>) {}

    /// Initializes this subtree, self first, then children (pre-order).
    ///
    /// Must be called exactly once before the first tick. The engine does not
    /// guard against double-initialize; that is the caller's responsibility
    /// (see [`crate::TreeRoot`], which does guard at the tree boundary).
    fn initialize(&mut self, ctx: &mut Context<B>) {
        self.on_initialize(ctx);
        self.initialize_children(ctx);
    }

    /// Runs one step of this subtree and returns the resulting status.
    ///
    /// Brackets `execute` with `on_begin`/`on_end` as described in the module
    /// docs. An `execute` returning `Idle` or `Aborted` is a contract
    /// violation: it trips a debug assertion and is logged, but the status is
    /// stored as-is in release builds.
    fn tick(&mut self, ctx: &mut Context<B>) -> Status {
        if self.status() != Status::Running {
            self.on_begin(ctx);
        }

        let status = self.execute(ctx);
        if !status.is_valid_result() {
            tracing::error!(%status, "node execute returned a non-result status");
            debug_assert!(
                status.is_valid_result(),
                "execute must return Success, Running, Failure, or Error (got {status})"
            );
        }
        self.set_status(status);

        if status != Status::Running {
            self.on_end(ctx);
        }
        status
    }

    /// Cancels this subtree if it is `Running`.
    ///
    /// Children are aborted first (post-order), then `on_abort` runs, then
    /// the status becomes `Aborted`. Calling this on a non-`Running` node is
    /// a no-op that returns the unchanged status, so it is always safe to
    /// call, repeatedly and in any state. By the time it returns, no
    /// descendant reports `Running`.
    fn abort(&mut self, ctx: &mut Context<B>) -> Status {
        if self.status() != Status::Running {
            return self.status();
        }

        self.abort_children(ctx);
        self.on_abort(ctx);
        self.set_status(Status::Aborted);
        Status::Aborted
    }

    /// Tears down this subtree, children first, then self (post-order).
    ///
    /// Must be called exactly once, when the tree is being destroyed.
    fn dispose(&mut self, ctx: &mut Context<B>) {
        self.dispose_children(ctx);
        self.on_dispose(ctx);
    }
}

/// Forwarding implementation for boxed nodes.
///
/// This lets `Box<dyn Node<B>>` itself implement [`Node`], enabling
/// heterogeneous child collections with dynamic dispatch. Every method
/// forwards so that overridden hooks and drivers on the inner node are
/// preserved.
impl<B> Node<B> for Box<dyn Node<B>> {
    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    #[inline]
    fn set_status(&mut self, status: Status) {
        (**self).set_status(status)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        (**self).execute(ctx)
    }

    #[inline]
    fn on_initialize(&mut self, ctx: &mut Context<B>) {
        (**self).on_initialize(ctx)
    }

    #[inline]
    fn on_begin(&mut self, ctx: &mut Context<B>) {
        (**self).on_begin(ctx)
    }

    #[inline]
    fn on_end(&mut self, ctx: &mut Context<B>) {
        (**self).on_end(ctx)
    }

    #[inline]
    fn on_abort(&mut self, ctx: &mut Context<B>) {
        (**self).on_abort(ctx)
    }

    #[inline]
    fn on_dispose(&mut self, ctx: &mut Context<B>) {
        (**self).on_dispose(ctx)
    }

    #[inline]
    fn initialize_children(&mut self, ctx: &mut Context<B>) {
        (**self).initialize_children(ctx)
    }

    #[inline]
    fn abort_children(&mut self, ctx: &mut Context<B>) {
        (**self).abort_children(ctx)
    }

    #[inline]
    fn dispose_children(&mut self, ctx: &mut Context<B>) {
        (**self).dispose_children(ctx)
    }

    #[inline]
    fn initialize(&mut self, ctx: &mut Context<B>) {
        (**self).initialize(ctx)
    }

    #[inline]
    fn tick(&mut self, ctx: &mut Context<B>) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn abort(&mut self, ctx: &mut Context<B>) -> Status {
        (**self).abort(ctx)
    }

    #[inline]
    fn dispose(&mut self, ctx: &mut Context<B>) {
        (**self).dispose(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Leaf that replays a scripted list of results and records which hooks
    /// fired, in order.
    struct Scripted {
        status: Status,
        script: Vec<Status>,
        cursor: usize,
        pub events: Vec<&'static str>,
    }

    impl Scripted {
        fn new(script: Vec<Status>) -> Self {
            Self {
                status: Status::Idle,
                script,
                cursor: 0,
                events: Vec::new(),
            }
        }
    }

    impl Node<()> for Scripted {
        fn status(&self) -> Status {
            self.status
        }

        fn set_status(&mut self, status: Status) {
            self.status = status;
        }

        fn execute(&mut self, _ctx: &mut Context<()>) -> Status {
            self.events.push("execute");
            let status = self.script[self.cursor];
            self.cursor += 1;
            status
        }

        fn on_begin(&mut self, _ctx: &mut Context<()>) {
            self.events.push("begin");
        }

        fn on_end(&mut self, _ctx: &mut Context<()>) {
            self.events.push("end");
        }

        fn on_abort(&mut self, _ctx: &mut Context<()>) {
            self.events.push("abort");
        }
    }

    #[test]
    fn tick_brackets_fresh_cycle_with_begin_and_end() {
        let mut ctx = Context::new(());
        let mut node = Scripted::new(vec![Status::Success]);

        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(node.events, vec!["begin", "execute", "end"]);
    }

    #[test]
    fn running_node_skips_begin_on_resume() {
        let mut ctx = Context::new(());
        let mut node = Scripted::new(vec![Status::Running, Status::Running, Status::Success]);

        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(node.tick(&mut ctx), Status::Success);
        // Begin once at the start, end once at completion, nothing in between.
        assert_eq!(
            node.events,
            vec!["begin", "execute", "execute", "execute", "end"]
        );
    }

    #[test]
    fn terminal_status_starts_a_fresh_cycle_next_tick() {
        let mut ctx = Context::new(());
        let mut node = Scripted::new(vec![Status::Failure, Status::Success]);

        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(
            node.events,
            vec!["begin", "execute", "end", "begin", "execute", "end"]
        );
    }

    #[test]
    fn abort_is_a_noop_unless_running() {
        let mut ctx = Context::new(());
        let mut node = Scripted::new(vec![Status::Success]);

        // Idle: nothing happens.
        assert_eq!(node.abort(&mut ctx), Status::Idle);
        assert!(node.events.is_empty());

        // Terminal: still nothing.
        node.tick(&mut ctx);
        assert_eq!(node.abort(&mut ctx), Status::Success);
        assert_eq!(node.events, vec!["begin", "execute", "end"]);
    }

    #[test]
    fn abort_cancels_a_running_node() {
        let mut ctx = Context::new(());
        let mut node = Scripted::new(vec![Status::Running]);

        node.tick(&mut ctx);
        assert_eq!(node.abort(&mut ctx), Status::Aborted);
        assert_eq!(node.status(), Status::Aborted);
        assert_eq!(node.events, vec!["begin", "execute", "abort"]);

        // Repeated abort stays a no-op.
        assert_eq!(node.abort(&mut ctx), Status::Aborted);
        assert_eq!(node.events, vec!["begin", "execute", "abort"]);
    }

    #[test]
    fn boxed_node_forwards_the_protocol() {
        let mut ctx = Context::new(());
        let mut node: Box<dyn Node<()>> =
            Box::new(Scripted::new(vec![Status::Running, Status::Success]));

        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(node.status(), Status::Running);
        assert_eq!(node.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn clock_advances_and_can_be_overwritten() {
        let mut ctx = Context::new(());
        assert_eq!(ctx.time(), 0.0);
        ctx.advance(1.0);
        ctx.advance(1.0);
        assert_eq!(ctx.time(), 2.0);
        ctx.set_time(10.5);
        assert_eq!(ctx.time(), 10.5);
    }
}
