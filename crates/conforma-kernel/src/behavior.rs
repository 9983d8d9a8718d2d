//! The custom-behavior extension point.
//!
//! The descriptor kind set is closed, but the grammar stays open through
//! this one seam: any object implementing [`Behavior`] is a descriptor,
//! and the engine treats its verdict exactly like a builtin kind's. The
//! standard combinators in the `conforma-behavior` crate are ordinary
//! implementations of this trait with no special access.

use crate::error::TypeCheckError;
use crate::model::ObjectModel;
use crate::value::Value;

/// A custom descriptor: an object that can decide conformance itself.
pub trait Behavior: Send + Sync {
    /// Short descriptor text used in error messages.
    fn describe(&self) -> String;

    /// The conformance verdict for `value`.
    ///
    /// The model is passed through so behaviors can recurse into nested
    /// descriptors via [`crate::engine::conforms`]. Errors — a malformed
    /// nested descriptor, a raising predicate, a re-entrant guarded call —
    /// propagate unchanged.
    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError>;
}
