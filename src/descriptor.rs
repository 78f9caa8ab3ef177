//! Handler descriptors and the locations they point at.

use crate::error::PathError;
use std::fmt;

/// Identifies the code a descriptor points at: a module, a dotted namespace,
/// a class, and a method name.
///
/// The module is optional at construction time; the registry fills a missing
/// module with its own default when the location is registered or bound, so
/// code registering its own handlers never has to name the module it lives
/// in. The triple exists to support late binding: a location may be
/// registered before the code it names has been bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerLocation {
    module: Option<String>,
    namespace: String,
    class: String,
    method: String,
}

impl HandlerLocation {
    /// Create a location from its parts, with no explicit module.
    pub fn new(
        namespace: impl Into<String>,
        class: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            module: None,
            namespace: namespace.into(),
            class: class.into(),
            method: method.into(),
        }
    }

    /// Parse a dotted path such as `"Shop.Orders.Invoices.Render"`.
    ///
    /// The last segment is the method, the second-to-last the class, and
    /// everything before that the namespace. Fewer than three segments, or
    /// any empty segment, is a [`PathError`].
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.len() < 3 {
            return Err(PathError::TooFewSegments(path.to_owned()));
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(PathError::EmptySegment(path.to_owned()));
        }
        let method = segments[segments.len() - 1];
        let class = segments[segments.len() - 2];
        let namespace = segments[..segments.len() - 2].join(".");
        Ok(Self {
            module: None,
            namespace,
            class: class.to_owned(),
            method: method.to_owned(),
        })
    }

    /// Pin this location to an explicit module instead of the registry
    /// default.
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// The module, if set.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The dotted namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub(crate) fn fill_module(&mut self, default: &str) {
        if self.module.is_none() {
            self.module = Some(default.to_owned());
        }
    }

    /// Binding-table key: the full location including the module.
    pub(crate) fn target_key(&self) -> TargetKey {
        TargetKey {
            module: self.module.clone().unwrap_or_default(),
            namespace: self.namespace.clone(),
            class: self.class.clone(),
            method: self.method.clone(),
        }
    }
}

impl fmt::Display for HandlerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(module) = &self.module {
            write!(f, "{module}:")?;
        }
        write!(f, "{}.{}.{}", self.namespace, self.class, self.method)
    }
}

/// Key of the binding table, distinct from descriptor identity in that it
/// includes the module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TargetKey {
    module: String,
    namespace: String,
    class: String,
    method: String,
}

/// One registered responder to an action.
///
/// The action name and priority are stamped by the registry when the
/// descriptor is registered; once stored, descriptors are never mutated by
/// dispatch. The same logical handler (same action, namespace, class and
/// method) can be stored only once: re-registering it replaces the old
/// entry and appends the new one at the end of the sequence.
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    pub(crate) action: String,
    pub(crate) priority: i32,
    is_static: bool,
    throw_on_exception: bool,
    pub(crate) location: HandlerLocation,
}

impl HandlerDescriptor {
    /// Create a descriptor for the given location with default policy:
    /// priority 0, static, failures swallowed.
    pub fn new(location: HandlerLocation) -> Self {
        Self {
            action: String::new(),
            priority: 0,
            is_static: true,
            throw_on_exception: false,
            location,
        }
    }

    /// Create a descriptor from a dotted target path.
    pub fn from_path(path: &str) -> Result<Self, PathError> {
        Ok(Self::new(HandlerLocation::parse(path)?))
    }

    /// Mark the handler as needing a fresh instance per invocation rather
    /// than a shared singleton. Realized by a per-call binding; see
    /// [`HandlerTarget::per_call`](crate::HandlerTarget::per_call).
    pub fn instanced(mut self) -> Self {
        self.is_static = false;
        self
    }

    /// Propagate this handler's runtime failures to the `perform` caller,
    /// aborting the remaining chain, instead of swallowing them.
    pub fn throw_on_exception(mut self) -> Self {
        self.throw_on_exception = true;
        self
    }

    /// Pin the descriptor's location to an explicit module.
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.location = self.location.in_module(module);
        self
    }

    /// The action this descriptor responds to. Empty until registered.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The priority; higher runs earlier.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether the handler targets a shared singleton rather than a fresh
    /// instance per invocation.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether runtime failures propagate to the caller.
    pub fn throws_on_exception(&self) -> bool {
        self.throw_on_exception
    }

    /// Where the handler lives.
    pub fn location(&self) -> &HandlerLocation {
        &self.location
    }

    /// Uniqueness key: action, namespace, class and method. The module is
    /// deliberately excluded.
    pub(crate) fn key(&self) -> DescriptorKey {
        DescriptorKey {
            action: self.action.clone(),
            namespace: self.location.namespace.clone(),
            class: self.location.class.clone(),
            method: self.location.method.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DescriptorKey {
    action: String,
    namespace: String,
    class: String,
    method: String,
}
