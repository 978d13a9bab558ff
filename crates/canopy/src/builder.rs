//! Builder utilities for ergonomic tree construction.
//!
//! This module provides helper functions to reduce boilerplate when wiring
//! trees by hand. Instead of writing `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`. Every function
//! returns `Box<dyn Node<B>>`, so the results nest directly.
//!
//! # Example
//!
//! ```rust
//! use canopy::builder::*;
//! use canopy::{Blackboard, Context, MapBlackboard, Status, TreeRoot};
//!
//! let root = active_selector(vec![
//!     sequence(vec![
//!         condition(|ctx: &Context<MapBlackboard>| {
//!             ctx.blackboard.try_get_bool("threatened") == Some(true)
//!         }),
//!         cooldown(5.0, action(|_: &mut Context<MapBlackboard>| Status::Success)),
//!     ]),
//!     until(action(|_: &mut Context<MapBlackboard>| Status::Failure)),
//! ]);
//!
//! let mut tree = TreeRoot::new(MapBlackboard::new(), root);
//! tree.initialize().unwrap();
//! ```

use crate::composite::{ActiveSelector, Concurrent, Mode, Parallel, Selector, Sequence};
use crate::decorator::{Cooldown, Inverter, Limit, Repeater, Until, While};
use crate::leaf::{Action, Condition};
use crate::{Blackboard, Context, Node, Status};

/// Creates a sequence node.
#[inline]
pub fn sequence<B: 'static>(children: Vec<Box<dyn Node<B>>>) -> Box<dyn Node<B>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<B: 'static>(children: Vec<Box<dyn Node<B>>>) -> Box<dyn Node<B>> {
    Box::new(Selector::new(children))
}

/// Creates an active selector node.
#[inline]
pub fn active_selector<B: 'static>(children: Vec<Box<dyn Node<B>>>) -> Box<dyn Node<B>> {
    Box::new(ActiveSelector::new(children))
}

/// Creates a parallel node with the given threshold modes.
#[inline]
pub fn parallel<B: 'static>(
    success_mode: Mode,
    failure_mode: Mode,
    children: Vec<Box<dyn Node<B>>>,
) -> Box<dyn Node<B>> {
    Box::new(Parallel::new(success_mode, failure_mode, children))
}

/// Creates a concurrent node with the given threshold modes.
#[inline]
pub fn concurrent<B: 'static>(
    success_mode: Mode,
    failure_mode: Mode,
    children: Vec<Box<dyn Node<B>>>,
) -> Box<dyn Node<B>> {
    Box::new(Concurrent::new(success_mode, failure_mode, children))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<B: 'static>(child: Box<dyn Node<B>>) -> Box<dyn Node<B>> {
    Box::new(Inverter::new(child))
}

/// Creates an until node (retry the child until it succeeds).
#[inline]
pub fn until<B: 'static>(child: Box<dyn Node<B>>) -> Box<dyn Node<B>> {
    Box::new(Until::new(child))
}

/// Creates a while node (loop while the child succeeds).
#[inline]
pub fn while_loop<B: 'static>(child: Box<dyn Node<B>>) -> Box<dyn Node<B>> {
    Box::new(While::new(child))
}

/// Creates a repeater with a fixed pass target.
#[inline]
pub fn repeater<B: Blackboard + 'static>(count: u64, child: Box<dyn Node<B>>) -> Box<dyn Node<B>> {
    Box::new(Repeater::new(count, child))
}

/// Creates a repeater whose pass target lives in the blackboard.
#[inline]
pub fn repeater_from_key<B: Blackboard + 'static>(
    key: impl Into<String>,
    child: Box<dyn Node<B>>,
) -> Box<dyn Node<B>> {
    Box::new(Repeater::from_key(key, child))
}

/// Creates a cooldown with a fixed window on the engine clock.
#[inline]
pub fn cooldown<B: Blackboard + 'static>(
    duration: f64,
    child: Box<dyn Node<B>>,
) -> Box<dyn Node<B>> {
    Box::new(Cooldown::new(duration, child))
}

/// Creates a cooldown whose window length lives in the blackboard.
#[inline]
pub fn cooldown_from_key<B: Blackboard + 'static>(
    key: impl Into<String>,
    child: Box<dyn Node<B>>,
) -> Box<dyn Node<B>> {
    Box::new(Cooldown::from_key(key, child))
}

/// Creates a limit with a fixed deadline on the engine clock.
#[inline]
pub fn limit<B: Blackboard + 'static>(duration: f64, child: Box<dyn Node<B>>) -> Box<dyn Node<B>> {
    Box::new(Limit::new(duration, child))
}

/// Creates a limit whose deadline length lives in the blackboard.
#[inline]
pub fn limit_from_key<B: Blackboard + 'static>(
    key: impl Into<String>,
    child: Box<dyn Node<B>>,
) -> Box<dyn Node<B>> {
    Box::new(Limit::from_key(key, child))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<B, F>(behavior: F) -> Box<dyn Node<B>>
where
    B: 'static,
    F: FnMut(&mut Context<B>) -> Status + Send + 'static,
{
    Box::new(Action::new(behavior))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<B, F>(predicate: F) -> Box<dyn Node<B>>
where
    B: 'static,
    F: Fn(&Context<B>) -> bool + Send + 'static,
{
    Box::new(Condition::new(predicate))
}
