//! Sequence and Selector, the dual short-circuit composites.

use crate::composite::{abort_all, dispose_all, initialize_all};
use crate::{Context, Node, Status};

/// Ticks children in order until one stops succeeding.
///
/// # Semantics
///
/// From the persisted index, children are ticked forward while each returns
/// `Success`; the first non-`Success` result stops the pass and becomes the
/// sequence's own status. `Success` bubbles up only once every child has
/// succeeded, a short-circuited logical AND.
///
/// The index persists across `Running` cycles: when a child suspends, the
/// next tick resumes that same child without restarting earlier siblings.
/// A fresh cycle (any non-`Running` outcome) restarts at the first child.
pub struct Sequence<B> {
    children: Vec<Box<dyn Node<B>>>,
    current: usize,
    status: Status,
}

impl<B> Sequence<B> {
    /// Creates a sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Node<B>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            current: 0,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Sequence<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.current = 0;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        while self.current < self.children.len() {
            match self.children[self.current].tick(ctx) {
                Status::Success => self.current += 1,
                other => return other,
            }
        }
        Status::Success
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

/// Ticks children in order until one stops failing.
///
/// # Semantics
///
/// The mirror of [`Sequence`]: children are ticked forward while each
/// returns `Failure`; the first non-`Failure` result stops the pass and
/// becomes the selector's own status. `Failure` bubbles up only once every
/// child has failed, a short-circuited logical OR.
pub struct Selector<B> {
    children: Vec<Box<dyn Node<B>>>,
    current: usize,
    status: Status,
}

impl<B> Selector<B> {
    /// Creates a selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Node<B>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            children,
            current: 0,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Selector<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn on_begin(&mut self, _ctx: &mut Context<B>) {
        self.current = 0;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        while self.current < self.children.len() {
            match self.children[self.current].tick(ctx) {
                Status::Failure => self.current += 1,
                other => return other,
            }
        }
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
