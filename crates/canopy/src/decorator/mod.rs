//! Decorator behavior nodes.
//!
//! Decorators own exactly one child, cascade the lifecycle to it, and either
//! transform its status or gate its execution:
//!
//! | Node type   | Behavior                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`Inverter`]| swaps `Success`/`Failure`                                 |
//! | [`Until`]   | turns `Failure` into `Running` (retry until success)      |
//! | [`While`]   | loops while the child succeeds, succeeds when it fails    |
//! | [`Repeater`]| demands N successful passes before letting `Success` out  |
//! | [`Cooldown`]| fails outright while a success is still "hot"             |
//! | [`Limit`]   | aborts a child that runs past its deadline                |
//!
//! The parameterized decorators read their numbers through small source
//! enums: a duration or repeat count is either fixed at construction or
//! looked up in the blackboard on every tick, and time is either the engine
//! clock or a blackboard value. Any blackboard read that misses produces
//! [`Status::Error`](crate::Status::Error) without ticking the child.

mod cooldown;
mod limit;
mod repeat;
mod transform;

pub use cooldown::Cooldown;
pub use limit::Limit;
pub use repeat::Repeater;
pub use transform::{Inverter, Until, While};

use crate::{Blackboard, Context};

/// Where a decorator's duration comes from.
#[derive(Debug, Clone)]
pub enum DurationSource {
    /// Fixed at construction time, in engine clock units.
    Fixed(f64),
    /// Read from the blackboard on every tick.
    Key(String),
}

impl DurationSource {
    pub(crate) fn resolve<B: Blackboard>(&self, ctx: &Context<B>) -> Option<f64> {
        match self {
            DurationSource::Fixed(duration) => Some(*duration),
            DurationSource::Key(key) => ctx.blackboard.try_get_float(key),
        }
    }
}

/// Where a decorator reads "now" from.
#[derive(Debug, Clone)]
pub enum TimeSource {
    /// The engine clock carried by the [`Context`].
    Engine,
    /// A counter maintained in the blackboard by the embedder.
    Key(String),
}

impl TimeSource {
    pub(crate) fn resolve<B: Blackboard>(&self, ctx: &Context<B>) -> Option<f64> {
        match self {
            TimeSource::Engine => Some(ctx.time()),
            TimeSource::Key(key) => ctx.blackboard.try_get_float(key),
        }
    }
}

/// Where a repeat target comes from.
#[derive(Debug, Clone)]
pub enum CountSource {
    /// Fixed at construction time.
    Fixed(u64),
    /// Read from the blackboard on every tick. Negative values count as
    /// missing.
    Key(String),
}

impl CountSource {
    pub(crate) fn resolve<B: Blackboard>(&self, ctx: &Context<B>) -> Option<u64> {
        match self {
            CountSource::Fixed(count) => Some(*count),
            CountSource::Key(key) => ctx
                .blackboard
                .try_get_int(key)
                .and_then(|count| u64::try_from(count).ok()),
        }
    }
}
