//! Status returned by behavior tree nodes, plus the boolean-to-status algebra.
//!
//! Every node reports exactly one [`Status`] at a time. The full enumeration
//! covers the whole node lifecycle, but the `execute` hook of a node may only
//! produce the four *result* statuses (`Success`, `Running`, `Failure`,
//! `Error`); `Idle` and `Aborted` are reserved for the protocol itself.

/// The result of evaluating a behavior tree node.
///
/// # Lifecycle Semantics
///
/// - `Idle`: the node has never been ticked (or a fresh cycle has not begun).
/// - `Running`: the node is suspended mid-execution and will resume on the
///   next tick without re-running its begin hook.
/// - `Success` / `Failure`: ordinary terminal outcomes for the current cycle.
/// - `Aborted`: the node was cancelled while `Running`; only the abort path
///   may produce this value.
/// - `Error`: an unrecoverable condition (e.g., a required blackboard value
///   was absent). Composites propagate this upward instead of trying
///   alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Status {
    /// The node has not started its current cycle.
    Idle,

    /// The node completed successfully.
    Success,

    /// The node is suspended and will resume on the next tick.
    Running,

    /// The node completed without achieving its goal.
    Failure,

    /// The node was cancelled while running.
    Aborted,

    /// The node hit an unrecoverable condition.
    Error,
}

impl Status {
    /// Maps a boolean to `Success`/`Failure`.
    ///
    /// This is the canonical way for condition leaves to report an outcome.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }

    /// Picks one of two statuses based on a condition.
    ///
    /// Handy for single-branch conversions (see [`crate::Until`]) and for
    /// leaf implementors whose outcome is not a plain `from_bool` mapping.
    /// Both arms must be valid execute results; this is checked in debug
    /// builds only.
    #[inline]
    pub fn select(condition: bool, on_true: Status, on_false: Status) -> Self {
        debug_assert!(on_true.is_valid_result(), "select arm must be a result status");
        debug_assert!(on_false.is_valid_result(), "select arm must be a result status");
        if condition { on_true } else { on_false }
    }

    /// Inverts the status: `Success` becomes `Failure` and vice versa.
    ///
    /// Every other status passes through unchanged, so `Running` work keeps
    /// running and `Error` keeps propagating.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Error`.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Status::Error)
    }

    /// Returns `true` if this status ends the current cycle
    /// (`Success`, `Failure`, or `Error`).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure | Status::Error)
    }

    /// Returns `true` if this status is a legal return value for a node's
    /// execute hook.
    ///
    /// `Idle` and `Aborted` are protocol states: a node that yields them from
    /// its execute hook is violating the node contract.
    #[inline]
    pub fn is_valid_result(self) -> bool {
        matches!(
            self,
            Status::Success | Status::Running | Status::Failure | Status::Error
        )
    }
}
