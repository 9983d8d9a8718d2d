//! The host boundary.
//!
//! [`ObjectModel`] is the single seam between the engine and the embedding
//! object system: the instance-of relation, the capability probe, textual
//! coercion, and message building all route through it. Every method has a
//! default answered by the value model itself, so [`BasicModel`] is a
//! complete host and richer hosts override only what they must.
//!
//! The engine holds no state and takes the model by shared reference on
//! every call; implementations must be safe to invoke concurrently.

use crate::message;
use crate::nominal::TypeRef;
use crate::value::Value;

/// Operations the engine needs from the embedding object system.
pub trait ObjectModel: Send + Sync {
    /// Instance-of relation for nominal descriptors.
    ///
    /// The default asks the type itself, which already supports
    /// structural/interface membership. Hosts with a global subtyping
    /// relation can override.
    fn is_instance(&self, ty: &TypeRef, value: &Value) -> bool {
        ty.is_instance(value)
    }

    /// Capability probe: whether `value` exposes an operation named `op`.
    fn responds_to(&self, value: &Value, op: &str) -> bool {
        value.responds_to(op)
    }

    /// Canonical text form used for pattern matching.
    fn text_of(&self, value: &Value) -> String {
        value.to_text()
    }

    /// Message for a positional argument mismatch.
    fn argument_message(&self, index: usize, expected: &Value, actual: &Value) -> String {
        message::argument(index, expected, actual)
    }

    /// Message for a keyword argument mismatch.
    fn keyword_message(&self, key: &str, expected: &Value, actual: &Value) -> String {
        message::keyword(key, expected, actual)
    }

    /// Message for a return value mismatch.
    fn return_message(&self, expected: &Value, actual: &Value) -> String {
        message::return_value(expected, actual)
    }

    /// Message for a malformed descriptor.
    fn signature_message(&self, descriptor: &Value) -> String {
        message::signature(descriptor)
    }
}

/// The batteries-included host: every boundary question answered by the
/// value model's own defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicModel;

impl ObjectModel for BasicModel {}
