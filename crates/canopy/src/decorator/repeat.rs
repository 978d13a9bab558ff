//! Repeater decorator.

use crate::decorator::CountSource;
use crate::{Blackboard, Context, Node, Status};

/// Requires a number of successful child passes before reporting `Success`.
///
/// # Semantics
///
/// Each child `Success` increments a pass counter (reset when a fresh cycle
/// begins). Below the target the `Success` is converted into `Running`,
/// forcing the parent to keep re-entering this subtree for another pass;
/// once the target is reached the `Success` goes through. Non-`Success`
/// results pass through unchanged, so a failing or erroring child ends the
/// cycle early.
///
/// The target is a [`CountSource`]: fixed at construction
/// ([`Repeater::new`]) or read from the blackboard on every tick
/// ([`Repeater::from_key`]). A missing key yields `Error` without ticking
/// the child.
pub struct Repeater<B> {
    child: Box<dyn Node<B>>,
    target: CountSource,
    completed: u64,
    status: Status,
}

impl<B> Repeater<B> {
    /// Repeats the child a fixed number of times.
    pub fn new(count: u64, child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            target: CountSource::Fixed(count),
            completed: 0,
            status: Status::Idle,
        }
    }

    /// Reads the repeat target from the blackboard on every tick.
    pub fn from_key(key: impl Into<String>, child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            target: CountSource::Key(key.into()),
            completed: 0,
            status: Status::Idle,
        }
    }
}

impl<B: Blackboard> Node<B> for Repeater<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.completed = 0;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let Some(target) = self.target.resolve(ctx) else {
            return Status::Error;
        };

        match self.child.tick(ctx) {
            Status::Success => {
                self.completed += 1;
                if self.completed < target {
                    Status::Running
                } else {
                    Status::Success
                }
            }
            other => other,
        }
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
    fn repeats_until_the_target_is_reached() {
        let log = new_log();
        let mut ctx = Context::new(());
        let mut rep = Repeater::new(
            3,
            Box::new(ScriptNode::named("child", vec![Status::Success], &log)),
        );

        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Success);
        assert_eq!(count(&log, "child:execute"), 3);
    }

    #[test]
    fn counter_resets_on_a_fresh_cycle() {
        let mut ctx = Context::new(());
        let mut rep = Repeater::new(2, Box::new(ScriptNode::always(Status::Success)));

        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Success);
        // New cycle starts counting from zero again.
        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn failure_and_error_pass_through() {
        let mut ctx = Context::new(());

        let mut rep = Repeater::new(3, Box::new(ScriptNode::always(Status::Failure)));
        assert_eq!(rep.tick(&mut ctx), Status::Failure);

        let mut rep = Repeater::new(3, Box::new(ScriptNode::always(Status::Error)));
        assert_eq!(rep.tick(&mut ctx), Status::Error);
    }

    #[test]
    fn running_child_passes_through() {
        let mut ctx = Context::new(());
        let mut rep = Repeater::new(
            2,
            Box::new(ScriptNode::new(vec![Status::Running, Status::Success])),
        );

        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Running); // first success of two
        assert_eq!(rep.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn variable_target_comes_from_the_blackboard() {
        let mut ctx = Context::new(MapBlackboard::new());
        ctx.blackboard.set("passes", Value::Int(2));
        let mut rep = Repeater::from_key("passes", Box::new(ScriptNode::always(Status::Success)));

        assert_eq!(rep.tick(&mut ctx), Status::Running);
        assert_eq!(rep.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn missing_target_is_an_error_and_skips_the_child() {
        let log = new_log();
        let mut ctx = Context::new(MapBlackboard::new());
        let mut rep = Repeater::from_key(
            "absent",
            Box::new(ScriptNode::named("child", vec![Status::Success], &log)),
        );

        assert_eq!(rep.tick(&mut ctx), Status::Error);
        assert_eq!(count(&log, "child:execute"), 0);
    }
}
