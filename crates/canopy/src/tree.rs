//! Tree root: ownership and lifecycle funnel for a whole tree.

use crate::error::TreeError;
use crate::{Context, Node, Status};

/// Owns a tree graph and its execution context, and funnels the lifecycle
/// through the caller contract.
///
/// # Lifecycle
///
/// - [`TreeRoot::initialize`] exactly once, before anything else.
/// - [`TreeRoot::tick`] any number of times; each call advances the engine
///   clock by one and runs one synchronous, non-suspending pass over the
///   tree. A `Running` result is the only suspension mechanism; resumption
///   is simply the next `tick`.
/// - [`TreeRoot::abort`] at any time after initialize.
/// - [`TreeRoot::dispose`] exactly once at end-of-life; the tree must not be
///   used afterward.
///
/// Unlike the per-node protocol, which trusts its caller, the tree boundary
/// checks this contract and reports violations as [`TreeError`].
///
/// An `Error` status at the root signals something structurally wrong (a
/// missing blackboard value, a misbehaving node) as opposed to an ordinary
/// `Failure`; callers may reasonably stop ticking a tree that errors.
pub struct TreeRoot<B> {
    root: Box<dyn Node<B>>,
    context: Context<B>,
    initialized: bool,
    disposed: bool,
}

impl<B> TreeRoot<B> {
    /// Creates a tree around a fully constructed node graph and its
    /// blackboard.
    ///
    /// Construction must be complete before this point: the graph's shape is
    /// fixed, children are never re-attached, and no setup value is required
    /// afterwards.
    pub fn new(blackboard: B, root: Box<dyn Node<B>>) -> Self {
        Self {
            root,
            context: Context::new(blackboard),
            initialized: false,
            disposed: false,
        }
    }

    /// Initializes the whole tree, pre-order.
    pub fn initialize(&mut self) -> Result<(), TreeError> {
        if self.disposed {
            return Err(TreeError::Disposed);
        }
        if self.initialized {
            return Err(TreeError::AlreadyInitialized);
        }

        tracing::debug!("initializing behavior tree");
        self.root.initialize(&mut self.context);
        self.initialized = true;
        Ok(())
    }

    /// Advances the engine clock by one and runs one tick of the tree.
    pub fn tick(&mut self) -> Result<Status, TreeError> {
        self.ensure_live()?;

        self.context.advance(1.0);
        let status = self.root.tick(&mut self.context);
        tracing::trace!(%status, time = self.context.time(), "tree ticked");
        Ok(status)
    }

    /// Cancels any in-flight work, recursively and synchronously.
    pub fn abort(&mut self) -> Result<Status, TreeError> {
        self.ensure_live()?;

        tracing::debug!("aborting behavior tree");
        Ok(self.root.abort(&mut self.context))
    }

    /// Tears the tree down, post-order. The tree must not be used afterward.
    pub fn dispose(&mut self) -> Result<(), TreeError> {
        self.ensure_live()?;

        tracing::debug!("disposing behavior tree");
        self.root.dispose(&mut self.context);
        self.disposed = true;
        Ok(())
    }

    /// Current status of the root node.
    pub fn status(&self) -> Status {
        self.root.status()
    }

    /// Read access to the blackboard.
    pub fn blackboard(&self) -> &B {
        &self.context.blackboard
    }

    /// Write access to the blackboard (for embedders feeding state in
    /// between ticks).
    pub fn blackboard_mut(&mut self) -> &mut B {
        &mut self.context.blackboard
    }

    /// The execution context. Embedders that track wall-clock time overwrite
    /// the clock here before ticking.
    pub fn context_mut(&mut self) -> &mut Context<B> {
        &mut self.context
    }

    fn ensure_live(&self) -> Result<(), TreeError> {
        if self.disposed {
            return Err(TreeError::Disposed);
        }
        if !self.initialized {
            return Err(TreeError::NotInitialized);
        }
        Ok(())
    }
}

/// Coarse-locked tree for multi-threaded callers.
///
/// Serializes `initialize`/`tick`/`abort`/`dispose` calls against the same
/// tree instance. It does **not** protect a blackboard shared with unrelated
/// trees or external code; that remains the store's responsibility.
#[cfg(feature = "sync")]
pub struct SharedTree<B> {
    inner: std::sync::Mutex<TreeRoot<B>>,
}

#[cfg(feature = "sync")]
impl<B> SharedTree<B> {
    /// Wraps a tree in a tree-wide lock. Typically used behind an
    /// `Arc<SharedTree<B>>`.
    pub fn new(tree: TreeRoot<B>) -> Self {
        Self {
            inner: std::sync::Mutex::new(tree),
        }
    }

    /// See [`TreeRoot::initialize`].
    pub fn initialize(&self) -> Result<(), TreeError> {
        self.lock()?.initialize()
    }

    /// See [`TreeRoot::tick`].
    pub fn tick(&self) -> Result<Status, TreeError> {
        self.lock()?.tick()
    }

    /// See [`TreeRoot::abort`].
    pub fn abort(&self) -> Result<Status, TreeError> {
        self.lock()?.abort()
    }

    /// See [`TreeRoot::dispose`].
    pub fn dispose(&self) -> Result<(), TreeError> {
        self.lock()?.dispose()
    }

    /// Current status of the root node.
    pub fn status(&self) -> Result<Status, TreeError> {
        Ok(self.lock()?.status())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, TreeRoot<B>>, TreeError> {
        self.inner.lock().map_err(|_| TreeError::Poisoned)
    }
}
