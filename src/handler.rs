//! The handler capability contract and the invocable targets locations bind to.

use crate::error::BoxError;
use crate::value::ActionValue;
use std::sync::Arc;

/// The capability contract every registered responder satisfies.
///
/// Handlers receive the caller's positional values and report their outcome
/// explicitly: `Ok(Some(value))` is a non-void return that overwrites the
/// chain value, `Ok(None)` is a void return that leaves it untouched, and
/// `Err` is a runtime failure subject to the descriptor's
/// `throw_on_exception` policy.
///
/// Closures of the matching shape implement this trait automatically.
pub trait ActionHandler: Send + Sync + 'static {
    /// Run the handler against the caller's positional values.
    fn invoke(&self, args: &[ActionValue]) -> Result<Option<ActionValue>, BoxError>;
}

// Blanket impl for closures
impl<F> ActionHandler for F
where
    F: Fn(&[ActionValue]) -> Result<Option<ActionValue>, BoxError> + Send + Sync + 'static,
{
    fn invoke(&self, args: &[ActionValue]) -> Result<Option<ActionValue>, BoxError> {
        (self)(args)
    }
}

enum TargetKind {
    Singleton(Arc<dyn ActionHandler>),
    PerCall(Box<dyn Fn() -> Box<dyn ActionHandler> + Send + Sync>),
}

/// The invocable a [`HandlerLocation`](crate::HandlerLocation) is bound to.
///
/// A target is either a shared singleton handler or a zero-argument factory
/// producing a fresh handler instance for every single invocation. Instances
/// are never cached or reused across calls; statelessness between
/// invocations is part of the contract.
pub struct HandlerTarget {
    kind: TargetKind,
    takes_args: bool,
}

impl HandlerTarget {
    /// Bind one shared handler, invoked in place for every dispatch.
    pub fn singleton<H: ActionHandler>(handler: H) -> Self {
        Self {
            kind: TargetKind::Singleton(Arc::new(handler)),
            takes_args: true,
        }
    }

    /// Bind a factory; each invocation constructs a fresh handler, runs it
    /// once, and drops it.
    pub fn per_call<F, H>(factory: F) -> Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: ActionHandler,
    {
        Self {
            kind: TargetKind::PerCall(Box::new(move || Box::new(factory()))),
            takes_args: true,
        }
    }

    /// Mark the target as declaring no parameters: the dispatcher will pass
    /// it no arguments regardless of what the caller supplied.
    pub fn nullary(mut self) -> Self {
        self.takes_args = false;
        self
    }

    /// Whether the target declares parameters.
    pub fn takes_args(&self) -> bool {
        self.takes_args
    }

    pub(crate) fn run(&self, args: &[ActionValue]) -> Result<Option<ActionValue>, BoxError> {
        match &self.kind {
            TargetKind::Singleton(handler) => handler.invoke(args),
            TargetKind::PerCall(make) => make().invoke(args),
        }
    }
}
