//! Interruptible behavior tree execution engine.
//!
//! This library evaluates a static tree of control-flow nodes once per
//! "tick" to drive long-running, interruptible decision logic, the classic
//! game-AI mechanism, though nothing here is game-specific. The engine is
//! deterministic and interruption-safe under re-entrant ticking: nodes
//! persist their progress between ticks, `Running` is the only suspension
//! mechanism, and `abort` cancels in-flight subtrees synchronously and
//! completely.
//!
//! - **Single-threaded ticks**: one `tick` is one synchronous pass; the
//!   caller owns the cadence. The optional `sync` feature adds a coarse
//!   tree-wide lock for callers sharing one tree across threads.
//! - **No exceptions in the tick path**: everything flows through
//!   [`Status`], including unrecoverable conditions (`Status::Error`).
//! - **Retry is tree shape**: nothing retries automatically; use
//!   [`Until`], [`Repeater`], [`Cooldown`], or [`Limit`].
//!
//! # Architecture
//!
//! - [`Node`]: the lifecycle/tick/abort protocol every node implements
//! - [`Status`]: the six-state result enumeration
//! - [`Context`] / [`Blackboard`]: shared state threaded through every call
//! - Composite nodes: [`Sequence`], [`Selector`], [`ActiveSelector`],
//!   [`Parallel`], [`Concurrent`]
//! - Decorator nodes: [`Inverter`], [`Until`], [`While`], [`Repeater`],
//!   [`Cooldown`], [`Limit`]
//! - Leaves: [`Action`], [`Condition`] (or any [`Node`] implementation)
//! - [`TreeRoot`]: owns the graph and the context, guards the lifecycle
//!
//! # Example
//!
//! ```rust
//! use canopy::builder::*;
//! use canopy::{Blackboard, Context, MapBlackboard, Status, TreeRoot, Value};
//!
//! let root = sequence(vec![
//!     condition(|ctx: &Context<MapBlackboard>| {
//!         ctx.blackboard.try_get_bool("enemy_visible") == Some(true)
//!     }),
//!     action(|ctx: &mut Context<MapBlackboard>| {
//!         ctx.blackboard.set("attacking", Value::Bool(true));
//!         Status::Success
//!     }),
//! ]);
//!
//! let mut tree = TreeRoot::new(MapBlackboard::new(), root);
//! tree.initialize().unwrap();
//!
//! tree.blackboard_mut().set("enemy_visible", Value::Bool(true));
//! assert_eq!(tree.tick().unwrap(), Status::Success);
//!
//! tree.dispose().unwrap();
//! ```

pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

#[cfg(test)]
mod test_support;

// Re-export core types for ergonomic API
pub use blackboard::{Blackboard, MapBlackboard, Value};
pub use composite::{ActiveSelector, Concurrent, Mode, Parallel, Selector, Sequence};
pub use decorator::{Cooldown, Inverter, Limit, Repeater, Until, While};
pub use error::TreeError;
pub use leaf::{Action, Condition};
pub use node::{Context, Node};
pub use status::Status;
#[cfg(feature = "sync")]
pub use tree::SharedTree;
pub use tree::TreeRoot;
