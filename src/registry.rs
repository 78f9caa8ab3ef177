//! Registry state: the descriptor sequence, the binding table, and the
//! process-wide instance.
//!
//! The registry is an immutable-snapshot-swap structure. Writers take a
//! mutex, clone the current snapshot, edit it, and publish the result
//! atomically; dispatch loads a single snapshot and iterates it unlocked,
//! so it never observes a partially applied registration.

use crate::descriptor::{HandlerDescriptor, HandlerLocation, TargetKey};
use crate::error::PathError;
use crate::handler::HandlerTarget;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Module name assumed for locations registered or bound without an
/// explicit module.
const LOCAL_MODULE: &str = "local";

#[derive(Default, Clone)]
pub(crate) struct Snapshot {
    pub(crate) descriptors: Vec<Arc<HandlerDescriptor>>,
    pub(crate) targets: HashMap<TargetKey, Arc<HandlerTarget>>,
}

/// The dispatch registry: descriptor storage plus the binding table.
///
/// One process-wide instance is available via [`global`]; independent
/// instances can be created for tests or embedded scopes.
pub struct ActionRegistry {
    snap: ArcSwap<Snapshot>,
    write: Mutex<()>,
    default_module: String,
}

impl ActionRegistry {
    /// Create an empty registry with the default module name.
    pub fn new() -> Self {
        Self::with_default_module(LOCAL_MODULE)
    }

    /// Create an empty registry whose module-less locations are filled with
    /// `module` instead of the built-in default. Hosts embedding several
    /// independently loaded components use this to keep their binding
    /// tables apart.
    pub fn with_default_module(module: impl Into<String>) -> Self {
        Self {
            snap: ArcSwap::from_pointee(Snapshot::default()),
            write: Mutex::new(()),
            default_module: module.into(),
        }
    }

    /// Register `descriptor` under `action` with priority 0.
    pub fn register(&self, action: &str, descriptor: HandlerDescriptor) {
        self.register_with_priority(action, descriptor, 0);
    }

    /// Register `descriptor` under `action` with the given priority.
    ///
    /// The action name and priority are stamped onto the descriptor, and a
    /// missing module is filled with the registry default. If a descriptor
    /// with the same (action, namespace, class, method) key already exists
    /// it is removed, and the new descriptor is appended at the end; after
    /// replacement, a priority tie therefore resolves with the replaced
    /// entry last.
    pub fn register_with_priority(
        &self,
        action: &str,
        mut descriptor: HandlerDescriptor,
        priority: i32,
    ) {
        descriptor.action = action.to_owned();
        descriptor.priority = priority;
        descriptor.location.fill_module(&self.default_module);
        debug!(action, handler = %descriptor.location(), priority, "registering action handler");

        let key = descriptor.key();
        let _guard = self.write.lock();
        let mut next = Snapshot::clone(&self.snap.load());
        next.descriptors.retain(|existing| existing.key() != key);
        next.descriptors.push(Arc::new(descriptor));
        self.snap.store(Arc::new(next));
    }

    /// Bind `location` to an invocable target, filling a missing module
    /// with the registry default. Rebinding a location replaces its target.
    pub fn bind(&self, mut location: HandlerLocation, target: HandlerTarget) {
        location.fill_module(&self.default_module);
        debug!(handler = %location, "binding handler target");

        let key = location.target_key();
        let _guard = self.write.lock();
        let mut next = Snapshot::clone(&self.snap.load());
        next.targets.insert(key, Arc::new(target));
        self.snap.store(Arc::new(next));
    }

    /// Parse `path` and bind it to an invocable target.
    pub fn bind_path(&self, path: &str, target: HandlerTarget) -> Result<(), PathError> {
        self.bind(HandlerLocation::parse(path)?, target);
        Ok(())
    }

    /// The descriptors currently registered for `action`, in stored order.
    pub fn all_for(&self, action: &str) -> Vec<Arc<HandlerDescriptor>> {
        self.snap
            .load()
            .descriptors
            .iter()
            .filter(|descriptor| descriptor.action() == action)
            .cloned()
            .collect()
    }

    /// Every stored descriptor, in stored order.
    pub fn all(&self) -> Vec<Arc<HandlerDescriptor>> {
        self.snap.load().descriptors.clone()
    }

    /// Number of stored descriptors.
    pub fn len(&self) -> usize {
        self.snap.load().descriptors.len()
    }

    /// Whether no descriptors are stored.
    pub fn is_empty(&self) -> bool {
        self.snap.load().descriptors.is_empty()
    }

    /// Drop every descriptor and binding. The explicit lifecycle hook for
    /// test isolation; there is no per-descriptor unregistration.
    pub fn reset(&self) {
        debug!("resetting action registry");
        let _guard = self.write.lock();
        self.snap.store(Arc::new(Snapshot::default()));
    }

    pub(crate) fn snapshot(&self) -> Arc<Snapshot> {
        self.snap.load_full()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry, created empty on first use.
pub fn global() -> &'static ActionRegistry {
    static GLOBAL: OnceLock<ActionRegistry> = OnceLock::new();
    GLOBAL.get_or_init(ActionRegistry::new)
}

/// Register `descriptor` under `action` on the [`global`] registry.
pub fn register(action: &str, descriptor: HandlerDescriptor) {
    global().register(action, descriptor);
}

/// Register on the [`global`] registry with an explicit priority.
pub fn register_with_priority(action: &str, descriptor: HandlerDescriptor, priority: i32) {
    global().register_with_priority(action, descriptor, priority);
}

/// Bind a location on the [`global`] registry.
pub fn bind(location: HandlerLocation, target: HandlerTarget) {
    global().bind(location, target);
}

/// Parse and bind a dotted path on the [`global`] registry.
pub fn bind_path(path: &str, target: HandlerTarget) -> Result<(), PathError> {
    global().bind_path(path, target)
}

/// The [`global`] registry's descriptors for `action`.
pub fn all_for(action: &str) -> Vec<Arc<HandlerDescriptor>> {
    global().all_for(action)
}

/// Clear the [`global`] registry.
pub fn reset() {
    global().reset();
}
