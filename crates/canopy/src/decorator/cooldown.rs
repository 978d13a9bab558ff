//! Cooldown decorator.

use crate::decorator::{DurationSource, TimeSource};
use crate::{Blackboard, Context, Node, Status};

/// Gates its child behind a recovery window after each success.
///
/// # Semantics
///
/// The decorator remembers when the child last ticked and whether that tick
/// succeeded. While the last tick succeeded and the cooldown window has not
/// elapsed, the decorator returns `Failure` **without ticking the child at
/// all**. Once the window has passed (or the last tick did not succeed), the
/// child is ticked normally and the timestamp and success flag are recorded
/// again.
///
/// The gate deliberately survives cycle boundaries: re-entering the subtree
/// does not clear a hot cooldown, which is the whole point of the decorator.
///
/// # Sources
///
/// The window length is a [`DurationSource`]: fixed ([`Cooldown::new`]) or
/// a blackboard key read each tick ([`Cooldown::from_key`]). "Now" is a
/// [`TimeSource`]: the engine clock by default, or a blackboard counter via
/// [`Cooldown::with_time_key`]. Any missing blackboard value yields `Error`
/// without ticking the child.
pub struct Cooldown<B> {
    child: Box<dyn Node<B>>,
    duration: DurationSource,
    time: TimeSource,
    last_tick: f64,
    succeeded: bool,
    status: Status,
}

impl<B> Cooldown<B> {
    /// Fixed cooldown window measured on the engine clock.
    pub fn new(duration: f64, child: Box<dyn Node<B>>) -> Self {
        Self::with_sources(DurationSource::Fixed(duration), child)
    }

    /// Reads the window length from the blackboard on every tick.
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
            last_tick: 0.0,
            succeeded: false,
            status: Status::Idle,
        }
    }
}

impl<B: Blackboard> Node<B> for Cooldown<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let Some(duration) = self.duration.resolve(ctx) else {
            return Status::Error;
        };
        let Some(now) = self.time.resolve(ctx) else {
            return Status::Error;
        };

        if self.succeeded && now - self.last_tick < duration {
            return Status::Failure;
        }

        let status = self.child.tick(ctx);
        self.last_tick = now;
        self.succeeded = status == Status::Success;
        status
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
