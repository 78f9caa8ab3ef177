//! # stagehand
//!
//! A process-wide, priority-ordered dispatch registry for string-named
//! actions. Callers register [`HandlerDescriptor`]s against action names and
//! bind the code they point at; performing an action invokes every matching
//! handler, highest priority first, threading a single chain value through
//! the pass and returning it.
//!
//! # Architecture
//!
//! Four pieces cooperate, leaf-first:
//!
//! ## Descriptor ([`HandlerDescriptor`], [`HandlerLocation`])
//!
//! An immutable-after-registration record naming one handler: the action it
//! responds to, its priority, its invocation policy, and a location (module,
//! namespace, class, method) sufficient to find the code to run. Locations
//! parse from dotted paths such as `"Shop.Orders.Invoices.Render"`.
//!
//! ## Registry ([`ActionRegistry`])
//!
//! Shared state holding the descriptor sequence and the binding table.
//! Mutation publishes a fresh immutable snapshot (see *Concurrency* below),
//! so a dispatch pass never observes a half-applied registration.
//! Registering a descriptor whose (action, namespace, class, method) key
//! already exists replaces the old entry and appends the new one at the end.
//!
//! ## Resolver ([`HandlerTarget`] and the binding table)
//!
//! Locations are bound to invocable targets: either a shared singleton
//! handler or a zero-argument factory that builds a fresh handler instance
//! for every single invocation. A descriptor whose location has no binding
//! at dispatch time is skipped silently; stale registrations must not break
//! the rest of the chain.
//!
//! ## Dispatcher ([`ActionRegistry::perform_with`])
//!
//! Collects the descriptors for an action, stable-sorts them descending by
//! priority (ties keep registration order), and invokes each in turn. The
//! first positional value seeds the chain value; every handler that returns
//! a value overwrites it, and the final chain value is returned to the
//! caller. Handler failures are swallowed by default and only abort the
//! pass for descriptors marked [`HandlerDescriptor::throw_on_exception`].
//!
//! Note that every handler receives the caller's *original* positional
//! values, never the accumulated chain value. The chain accumulates outputs;
//! it does not pipeline them into later inputs.
//!
//! # Concurrency
//!
//! The registry is an immutable-snapshot-swap structure: writers clone the
//! current snapshot under a mutex, edit, and atomically publish; readers
//! load one snapshot and iterate it unlocked. Handler invocation itself is
//! synchronous on the calling thread, with no queuing or suspension.
//!
//! # Example
//!
//! ```
//! use stagehand::{ActionRegistry, ActionValue, BoxError, HandlerDescriptor, HandlerTarget};
//!
//! let registry = ActionRegistry::new();
//! registry.bind_path(
//!     "demo.Greeter.Greet",
//!     HandlerTarget::singleton(|args: &[ActionValue]| -> Result<Option<ActionValue>, BoxError> {
//!         let name = args[0].downcast_ref::<&str>().copied().unwrap_or("world");
//!         Ok(Some(ActionValue::new(format!("hello {name}"))))
//!     }),
//! )?;
//! registry.register("greet", HandlerDescriptor::from_path("demo.Greeter.Greet")?);
//!
//! let out = registry.perform_with("greet", &[ActionValue::new("stage")])?;
//! assert_eq!(out.unwrap().downcast_ref::<String>().unwrap(), "hello stage");
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod descriptor;
mod dispatcher;
mod error;
mod handler;
mod registry;
pub mod testing;
mod value;

pub use descriptor::{HandlerDescriptor, HandlerLocation};
pub use error::{BoxError, PathError, PerformError};
pub use handler::{ActionHandler, HandlerTarget};
pub use dispatcher::{perform, perform_with};
pub use registry::{
    ActionRegistry, all_for, bind, bind_path, global, register, register_with_priority, reset,
};
pub use value::ActionValue;
