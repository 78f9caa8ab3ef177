//! Shared helpers for integration tests.
#![allow(dead_code)]

use stagehand::{ActionValue, BoxError, HandlerTarget};
use std::sync::{Arc, Mutex};

/// A shared, ordered record of which handlers ran.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::default()
}

pub fn entries(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

/// A void singleton target that appends `label` to the log when invoked.
pub fn logging_target(log: &CallLog, label: &'static str) -> HandlerTarget {
    let log = Arc::clone(log);
    HandlerTarget::singleton(
        move |_args: &[ActionValue]| -> Result<Option<ActionValue>, BoxError> {
            log.lock().unwrap().push(label);
            Ok(None)
        },
    )
}

/// A singleton target that returns `value` and logs `label`.
pub fn returning_target(log: &CallLog, label: &'static str, value: &'static str) -> HandlerTarget {
    let log = Arc::clone(log);
    HandlerTarget::singleton(
        move |_args: &[ActionValue]| -> Result<Option<ActionValue>, BoxError> {
            log.lock().unwrap().push(label);
            Ok(Some(ActionValue::new(value)))
        },
    )
}
