//! Tree-boundary errors.
//!
//! The tick path itself never returns `Result`: per-tick failure information
//! flows exclusively through [`Status`](crate::Status). `TreeError` only
//! covers misuse of the [`TreeRoot`](crate::TreeRoot) lifecycle contract,
//! which is checked at the tree boundary rather than left as undefined
//! behavior.

/// Lifecycle contract violations at the tree boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `tick`, `abort`, or `dispose` was called before `initialize`.
    #[error("tree has not been initialized")]
    NotInitialized,

    /// `initialize` was called twice.
    #[error("tree is already initialized")]
    AlreadyInitialized,

    /// The tree was used after `dispose`.
    #[error("tree has been disposed")]
    Disposed,

    /// The tree-wide lock was poisoned by a panicking caller.
    #[cfg(feature = "sync")]
    #[error("tree lock was poisoned")]
    Poisoned,
}
