//! Error types for registration and dispatch.
//!
//! Two independent failure categories exist:
//!
//! - Malformed descriptor construction ([`PathError`]) fails fast at
//!   construction time.
//! - Handler invocation failures surface as [`PerformError`] only for
//!   descriptors that opted into propagation; by default they are swallowed
//!   and the pass continues.
//!
//! Resolution misses (a descriptor whose location has no binding) are not an
//! error category at all: the descriptor is skipped for that pass.

use crate::descriptor::HandlerLocation;
use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A dotted target path could not be parsed into a [`HandlerLocation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has fewer than the required `Namespace.Class.Method` segments.
    #[error("target path `{0}` needs at least namespace, class and method segments")]
    TooFewSegments(String),

    /// The path contains an empty segment.
    #[error("target path `{0}` contains an empty segment")]
    EmptySegment(String),
}

/// A dispatch pass was aborted by a propagating handler failure.
#[derive(Error, Debug)]
pub enum PerformError {
    /// A handler marked `throw_on_exception` failed; the remaining
    /// descriptors for this pass were skipped.
    #[error("handler `{location}` failed while performing `{action}`")]
    Handler {
        /// The action being performed.
        action: String,
        /// The location of the handler that failed.
        location: HandlerLocation,
        /// The handler's own failure.
        #[source]
        source: BoxError,
    },
}
