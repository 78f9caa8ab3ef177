//! The dispatch pass: match, order, resolve, invoke, accumulate.

use crate::error::PerformError;
use crate::registry::ActionRegistry;
use crate::value::ActionValue;
use std::cmp::Reverse;
use tracing::trace;

impl ActionRegistry {
    /// Perform `action` with no positional values.
    pub fn perform(&self, action: &str) -> Result<Option<ActionValue>, PerformError> {
        self.perform_with(action, &[])
    }

    /// Perform `action`, passing the caller's positional values to every
    /// matched handler and returning the final chain value.
    ///
    /// The first positional value (if any) seeds the chain value, which is
    /// also the return value if no handler overwrites it. Matched
    /// descriptors run descending by priority; ties keep stored order.
    /// Every handler receives the *original* positional values, never the
    /// accumulated chain value. A descriptor whose location has no binding
    /// is skipped without error or log; a handler failure is swallowed
    /// unless the descriptor opted into propagation, in which case the
    /// remaining descriptors are skipped and the failure is returned.
    pub fn perform_with(
        &self,
        action: &str,
        values: &[ActionValue],
    ) -> Result<Option<ActionValue>, PerformError> {
        let snap = self.snapshot();
        let mut matched: Vec<_> = snap
            .descriptors
            .iter()
            .filter(|descriptor| descriptor.action() == action)
            .collect();
        // stable sort keeps registration order within a priority band
        matched.sort_by_key(|descriptor| Reverse(descriptor.priority()));
        trace!(action, handlers = matched.len(), "performing action");

        let mut chain = values.first().cloned();
        for descriptor in matched {
            let Some(target) = snap.targets.get(&descriptor.location().target_key()) else {
                // unresolved location: best-effort skip, dispatch continues
                continue;
            };
            let args = if target.takes_args() { values } else { &[] };
            match target.run(args) {
                Ok(Some(value)) => chain = Some(value),
                Ok(None) => {}
                Err(source) => {
                    if descriptor.throws_on_exception() {
                        return Err(PerformError::Handler {
                            action: action.to_owned(),
                            location: descriptor.location().clone(),
                            source,
                        });
                    }
                    trace!(action, handler = %descriptor.location(), "handler failure swallowed");
                }
            }
        }
        Ok(chain)
    }
}

/// Perform `action` on the [`global`](crate::global) registry with no
/// positional values.
pub fn perform(action: &str) -> Result<Option<ActionValue>, PerformError> {
    crate::global().perform(action)
}

/// Perform `action` on the [`global`](crate::global) registry with
/// positional values.
pub fn perform_with(
    action: &str,
    values: &[ActionValue],
) -> Result<Option<ActionValue>, PerformError> {
    crate::global().perform_with(action, values)
}
