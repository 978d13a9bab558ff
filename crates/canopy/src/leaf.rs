//! Leaf nodes.
//!
//! Leaves are terminal nodes: they have no children and carry the
//! domain-specific work. The engine does not care what a leaf does (any
//! type implementing [`Node`] can sit at the bottom of a tree), but the two
//! closure wrappers here cover the common cases without a dedicated struct
//! per behavior:
//!
//! - [`Action`]: runs a mutable closure and reports its status.
//! - [`Condition`]: evaluates a read-only predicate as `Success`/`Failure`.

use std::marker::PhantomData;

use crate::{Context, Node, Status};

/// Leaf that runs a closure each tick.
///
/// The closure may mutate the context (including the blackboard) and may
/// return `Running` to suspend; the enclosing protocol takes care of the
/// resume bookkeeping.
pub struct Action<B, F>
where
    F: FnMut(&mut Context<B>) -> Status + Send,
{
    status: Status,
    behavior: F,
    _marker: PhantomData<fn(B)>,
}

impl<B, F> Action<B, F>
where
    F: FnMut(&mut Context<B>) -> Status + Send,
{
    /// Wraps the given closure as a leaf node.
    pub fn new(behavior: F) -> Self {
        Self {
            status: Status::Idle,
            behavior,
            _marker: PhantomData,
        }
    }
}

impl<B, F> Node<B> for Action<B, F>
where
    F: FnMut(&mut Context<B>) -> Status + Send,
{
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        (self.behavior)(ctx)
    }
}

/// Leaf that evaluates a predicate each tick.
///
/// `true` maps to `Success` and `false` to `Failure` via
/// [`Status::from_bool`]. Conditions never suspend.
pub struct Condition<B, F>
where
    F: Fn(&Context<B>) -> bool + Send,
{
    status: Status,
    predicate: F,
    _marker: PhantomData<fn(B)>,
}

impl<B, F> Condition<B, F>
where
    F: Fn(&Context<B>) -> bool + Send,
{
    /// Wraps the given predicate as a leaf node.
    pub fn new(predicate: F) -> Self {
        Self {
            status: Status::Idle,
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<B, F> Node<B> for Condition<B, F>
where
    F: Fn(&Context<B>) -> bool + Send,
{
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}
