//! Priority re-arbitration selector.

use crate::composite::{abort_all, dispose_all, initialize_all};
use crate::{Context, Node, Status};

/// Selector that re-arbitrates priorities on every tick.
///
/// # Semantics
///
/// Unlike [`Selector`](crate::Selector), which resumes its in-flight child,
/// an `ActiveSelector` re-evaluates its children from index 0 on **every**
/// tick, regardless of what was running. The first child returning
/// non-`Failure` wins and its status becomes the composite's status.
///
/// When the winner sits at a higher priority (smaller index) than the child
/// that was active on the previous tick, the previously active child is
/// aborted: a guard condition coming back true preempts lower-priority work
/// mid-`Running`.
pub struct ActiveSelector<B> {
    children: Vec<Box<dyn Node<B>>>,
    active: Option<usize>,
    status: Status,
}

impl<B> ActiveSelector<B> {
    /// Creates an active selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Node<B>>>) -> Self {
        assert!(
            !children.is_empty(),
            "ActiveSelector must have at least one child"
        );
        Self {
            children,
            active: None,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for ActiveSelector<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.active = None;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        for index in 0..self.children.len() {
            let status = self.children[index].tick(ctx);
            if status == Status::Failure {
                continue;
            }

            // Preempt the previously active child if a higher-priority
            // sibling took over. A previous child at a smaller index cannot
            // still be running: it was re-ticked above and failed.
            if let Some(previous) = self.active
                && previous > index
            {
                self.children[previous].abort(ctx);
            }
            self.active = Some(index);
            return status;
        }

        self.active = None;
        Status::Failure
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
