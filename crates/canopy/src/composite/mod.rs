//! Composite behavior nodes.
//!
//! Composites own an ordered, fixed set of children and aggregate their
//! statuses under a control-flow policy. Children are evaluated in a
//! deterministic left-to-right order within a tick, and every lifecycle call
//! cascades to all of them: `initialize` pre-order, `dispose` and abort
//! post-order.
//!
//! | Node type          | Policy                                              |
//! |--------------------|-----------------------------------------------------|
//! | [`Sequence`]       | AND: advance while children succeed                 |
//! | [`Selector`]       | OR: advance while children fail                     |
//! | [`ActiveSelector`] | OR with priority re-arbitration every tick          |
//! | [`Parallel`]       | tick all, tally across the whole run                |
//! | [`Concurrent`]     | tick all, tally within each single tick             |

mod active_selector;
mod parallel;
mod sequence;

pub use active_selector::ActiveSelector;
pub use parallel::{Concurrent, Parallel};
pub use sequence::{Selector, Sequence};

use crate::{Context, Node, Status};

/// Threshold choice for [`Parallel`] and [`Concurrent`], configured
/// independently for the success and the failure condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mode {
    /// The first matching child is sufficient.
    Any,
    /// Every child must match.
    All,
}

/// Resolves tallied child outcomes against the configured thresholds.
///
/// `Any` thresholds are checked before `All` so a single matching child
/// decides as soon as it lands. If every child has finished and neither
/// threshold was met (mixed results under `All`/`All`), the outcome is
/// ambiguous and reported as `Error`.
pub(crate) fn decide(
    success_mode: Mode,
    failure_mode: Mode,
    successes: usize,
    failures: usize,
    total: usize,
) -> Status {
    if success_mode == Mode::Any && successes > 0 {
        return Status::Success;
    }
    if failure_mode == Mode::Any && failures > 0 {
        return Status::Failure;
    }
    if success_mode == Mode::All && successes == total {
        return Status::Success;
    }
    if failure_mode == Mode::All && failures == total {
        return Status::Failure;
    }
    if successes + failures == total {
        Status::Error
    } else {
        Status::Running
    }
}

/// Initializes every child in order (the pre-order leg of the cascade).
pub(crate) fn initialize_all<B>(children: &mut [Box<dyn Node<B>>], ctx: &mut Context<B>) {
    for child in children {
        child.initialize(ctx);
    }
}

/// Aborts every child in order. No-op for children that are not `Running`.
pub(crate) fn abort_all<B>(children: &mut [Box<dyn Node<B>>], ctx: &mut Context<B>) {
    for child in children {
        child.abort(ctx);
    }
}

/// Disposes every child in order (the post-order leg of the cascade).
pub(crate) fn dispose_all<B>(children: &mut [Box<dyn Node<B>>], ctx: &mut Context<B>) {
    for child in children {
        child.dispose(ctx);
    }
}
