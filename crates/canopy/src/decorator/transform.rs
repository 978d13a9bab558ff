//! Pure status-transforming decorators: Inverter, Until, While.

use crate::{Context, Node, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// `Success` becomes `Failure` and vice versa; `Running` and `Error` pass
/// through unchanged. The logical NOT of behavior trees.
pub struct Inverter<B> {
    child: Box<dyn Node<B>>,
    status: Status,
}

impl<B> Inverter<B> {
    /// Wraps the given child.
    pub fn new(child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Inverter<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        self.child.tick(ctx).invert()
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

/// Keeps its subtree alive until the child succeeds.
///
/// # Semantics
///
/// `Failure` becomes `Running`, so the parent composite keeps re-entering
/// this subtree instead of treating it as failed; every other status passes
/// through unchanged. Retry-until-success, expressed as tree shape.
pub struct Until<B> {
    child: Box<dyn Node<B>>,
    status: Status,
}

impl<B> Until<B> {
    /// Wraps the given child.
    pub fn new(child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for Until<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        let status = self.child.tick(ctx);
        Status::select(status.is_failure(), Status::Running, status)
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

/// Loops while its child keeps succeeding.
///
/// # Semantics
///
/// `Success` becomes `Running` (go around again) and `Failure` becomes
/// `Success` (the loop is over, and that is fine); `Running` and `Error`
/// pass through unchanged. The inverse-guard pattern: the child's failure is
/// the loop's exit condition, not an error.
pub struct While<B> {
    child: Box<dyn Node<B>>,
    status: Status,
}

impl<B> While<B> {
    /// Wraps the given child.
    pub fn new(child: Box<dyn Node<B>>) -> Self {
        Self {
            child,
            status: Status::Idle,
        }
    }
}

impl<B> Node<B> for While<B> {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, ctx: &mut Context<B>) -> Status {
        match self.child.tick(ctx) {
            Status::Success => Status::Running,
            Status::Failure => Status::Success,
            other => other,
        }
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
