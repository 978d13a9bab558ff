//! Limit (deadline) decorator.

use crate::decorator::{DurationSource, TimeSource};
use crate::{Blackboard, Context, Node, Status};

/// Puts a deadline on its child.
///
/// # Semantics
///
/// The start time is recorded when a fresh cycle begins. Each tick the child
/// runs normally and its status is returned, except when the child is still
/// `Running` and the elapsed time since the cycle began has reached the
/// configured duration: then the child is aborted and the decorator returns
/// `Failure` instead.
///
/// Whenever the cycle ends (success, failure, error, or the forced timeout)
/// the child is aborted unconditionally, which is a no-op unless it was
/// still `Running`.
///
/// # Sources
///
/// Duration and "now" come from the same source axes as
/// [`Cooldown`](crate::Cooldown): [`Limit::new`] for a fixed duration on the
/// engine clock, [`Limit::from_key`] for a blackboard-driven duration, and
/// [`Limit::with_time_key`] to read time from a blackboard counter. Any
/// missing blackboard value yields `Error` without ticking the child.
pub struct Limit<B> {
    child: Box<dyn Node<B>>,
    duration: DurationSource,
    time: TimeSource,
    started: Option<f64>,
    status: Status,
}

impl<B> Limit<B> {
    /// Fixed deadline measured on the engine clock.
    pub fn new(duration: f64, child: Box<dyn Node<B>>) -> Self {
        Self::with_sources(DurationSource::Fixed(duration), child)
    }

    /// Reads the deadline length from the blackboard on every tick.
    pub fn from_key(key: impl Into<String>, child: Box<dyn Node<B>>) -> Self {
        Self::with_sources(DurationSource::Key(key.into()), child)
    }

    /// Switches "now" from the engine clock to a blackboard counter.
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time = TimeSource::Key(key.into());
        self
    }

    fn with_sources(duration: DurationSource, child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            duration,
            time: TimeSource::Engine,
            started: None,
            status: Status::Idle,
        }
    }
}

impl<B: Blackboard> Node<B> for Limit<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, ctx: &mut Context<B>) {
        self.started = self.time.resolve(ctx);
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let Some(duration) = self.duration.resolve(ctx) else {
            return Status::Error;
        };
        let Some(now) = self.time.resolve(ctx) else {
            return Status::Error;
        };
        // None only if the time key was absent when the cycle began.
        let Some(started) = self.started else {
            return Status::Error;
        };

        let status = self.child.tick(ctx);
        if status == Status::Running && now - started >= duration {
            self.child.abort(ctx);
            return Status::Failure;
        }
        status
    }

    fn on_end(&mut self, ctx: &mut Context<B>) {
        self.child.abort(ctx);
    }

    fn initialize_children(&mut self, ctx: &mut Context<B>) {
        self.child.initialize(ctx);
    }

    fn abort_children(&mut self, ctx: &mut Context<B>) {
        self.child.abort(ctx);
    }

    fn dispose_children(&mut self, ctx: &mut Context<B>) {
        self.child.dispose(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::{MapBlackboard, Value};
    use crate::test_support::{ScriptNode, count, new_log};

    #[test]
    fn child_finishing_in_time_passes_through() {
        let mut ctx = Context::new(());
        let mut limit = Limit::new(
            10.0,
            Box::new(ScriptNode::new(vec![Status::Running, Status::Success])),
        );

        ctx.set_time(0.0);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(1.0);
        assert_eq!(limit.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn overrunning_child_is_aborted_exactly_once() {
        let log = new_log();
        let mut ctx = Context::new(());
        let mut limit = Limit::new(
            5.0,
            Box::new(ScriptNode::named("child", vec![Status::Running], &log)),
        );

        ctx.set_time(0.0);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(4.9);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(5.0);
        assert_eq!(limit.tick(&mut ctx), Status::Failure);
        // One real abort; the unconditional end-of-cycle abort is a no-op on
        // the already-aborted child.
        assert_eq!(count(&log, "child:abort"), 1);
    }

    #[test]
    fn deadline_restarts_with_each_fresh_cycle() {
        let mut ctx = Context::new(());
        let mut limit = Limit::new(
            5.0,
            Box::new(ScriptNode::new(vec![
                Status::Running,
                Status::Success,
                Status::Running,
                Status::Success,
            ])),
        );

        ctx.set_time(0.0);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(2.0);
        assert_eq!(limit.tick(&mut ctx), Status::Success);

        // New cycle: the clock starts counting from 10, not 0.
        ctx.set_time(10.0);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(13.0);
        assert_eq!(limit.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn failure_and_error_pass_through_in_time() {
        let mut ctx = Context::new(());

        let mut limit = Limit::new(5.0, Box::new(ScriptNode::always(Status::Failure)));
        assert_eq!(limit.tick(&mut ctx), Status::Failure);

        let mut limit = Limit::new(5.0, Box::new(ScriptNode::always(Status::Error)));
        assert_eq!(limit.tick(&mut ctx), Status::Error);
    }

    #[test]
    fn variable_duration_comes_from_the_blackboard() {
        let mut ctx = Context::new(MapBlackboard::new());
        ctx.blackboard.set("deadline", Value::Float(2.0));
        let mut limit = Limit::from_key("deadline", Box::new(ScriptNode::always(Status::Running)));

        ctx.set_time(0.0);
        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.set_time(2.0);
        assert_eq!(limit.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn blackboard_time_source_drives_the_deadline() {
        let mut ctx = Context::new(MapBlackboard::new());
        ctx.blackboard.set("frame", Value::Int(0));
        let mut limit = Limit::new(3.0, Box::new(ScriptNode::always(Status::Running)))
            .with_time_key("frame");

        assert_eq!(limit.tick(&mut ctx), Status::Running);
        ctx.blackboard.set("frame", Value::Int(3));
        assert_eq!(limit.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn missing_duration_key_is_an_error_and_skips_the_child() {
        let log = new_log();
        let mut ctx = Context::new(MapBlackboard::new());
        let mut limit = Limit::from_key(
            "absent",
            Box::new(ScriptNode::named("child", vec![Status::Running], &log)),
        );

        assert_eq!(limit.tick(&mut ctx), Status::Error);
        assert_eq!(count(&log, "child:execute"), 0);
    }

    #[test]
    fn missing_time_key_at_begin_is_an_error() {
        let mut ctx = Context::new(MapBlackboard::new());
        let mut limit = Limit::new(3.0, Box::new(ScriptNode::always(Status::Running)))
            .with_time_key("frame");

        // Key absent when the cycle begins and when execute resolves "now".
        assert_eq!(limit.tick(&mut ctx), Status::Error);
    }
}
