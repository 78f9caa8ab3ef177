//! Test doubles for exercising registries and dispatch.
//!
//! - [`RecordingHandler`]: records every invocation it receives and returns
//!   a fixed outcome
//! - [`FailingHandler`]: always fails, for exercising the per-descriptor
//!   failure policy

use crate::error::BoxError;
use crate::handler::ActionHandler;
use crate::value::ActionValue;
use std::sync::{Arc, Mutex};

/// A handler that records the arguments of every invocation.
///
/// Clones share the same recording, so a clone can be bound into a registry
/// while the original stays behind for assertions.
#[derive(Clone, Default)]
pub struct RecordingHandler {
    seen: Arc<Mutex<Vec<Vec<ActionValue>>>>,
    output: Option<ActionValue>,
}

impl RecordingHandler {
    /// A void handler: records and returns `Ok(None)`.
    pub fn void() -> Self {
        Self::default()
    }

    /// A handler returning `value` from every invocation.
    pub fn returning(value: ActionValue) -> Self {
        Self {
            seen: Arc::default(),
            output: Some(value),
        }
    }

    /// Number of invocations so far.
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// The arguments of every invocation, in order.
    pub fn seen(&self) -> Vec<Vec<ActionValue>> {
        self.seen.lock().unwrap().clone()
    }
}

impl ActionHandler for RecordingHandler {
    fn invoke(&self, args: &[ActionValue]) -> Result<Option<ActionValue>, BoxError> {
        self.seen.lock().unwrap().push(args.to_vec());
        Ok(self.output.clone())
    }
}

/// A handler whose every invocation fails with the configured message.
#[derive(Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a failing handler.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ActionHandler for FailingHandler {
    fn invoke(&self, _args: &[ActionValue]) -> Result<Option<ActionValue>, BoxError> {
        Err(self.message.clone().into())
    }
}
