//! The dynamically typed value threaded through a dispatch pass.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased, cheaply clonable value passed to handlers and accumulated
/// as the chain value of a dispatch pass.
///
/// Cloning shares the underlying allocation, so the same positional values
/// can be handed to every handler in a pass without copying the payload.
#[derive(Clone)]
pub struct ActionValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ActionValue {
    /// Wrap a concrete value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the payload as `T`, if that is what was stored.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Whether the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// The type name captured at construction, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ActionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionValue").field(&self.type_name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_round_trip() {
        let value = ActionValue::new(41_u64);
        assert!(value.is::<u64>());
        assert_eq!(value.downcast_ref::<u64>(), Some(&41));
        assert_eq!(value.downcast_ref::<String>(), None);
    }

    #[test]
    fn clone_shares_payload() {
        let value = ActionValue::new(String::from("shared"));
        let copy = value.clone();
        assert_eq!(copy.downcast_ref::<String>(), value.downcast_ref::<String>());
    }

    #[test]
    fn debug_names_the_payload_type() {
        let value = ActionValue::new(7_i32);
        assert_eq!(format!("{value:?}"), "ActionValue(\"i32\")");
    }
}
