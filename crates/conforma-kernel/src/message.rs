//! Default message building.
//!
//! The engine never formats messages inline; the assertion protocols hand
//! (index-or-key, expected descriptor, actual value) to the model's
//! message hooks, which default to the builders here. Hosts that want
//! their own wording override the hooks on their `ObjectModel`.

use crate::value::Value;

/// The shared mismatch line: expected descriptor vs. actual value.
pub fn mismatch(expected: &Value, actual: &Value) -> String {
    format!("expected {expected}, got {actual}")
}

/// Message for a positional argument mismatch, identified by 0-based index.
pub fn argument(index: usize, expected: &Value, actual: &Value) -> String {
    format!("for argument {index}: {}", mismatch(expected, actual))
}

/// Message for a keyword argument mismatch, identified by key.
pub fn keyword(key: &str, expected: &Value, actual: &Value) -> String {
    format!("for keyword argument '{key}': {}", mismatch(expected, actual))
}

/// Message for a return value mismatch. A `Nil` expectation means the
/// contract was "no return value".
pub fn return_value(expected: &Value, actual: &Value) -> String {
    if expected.is_nil() {
        format!("for return: expected no return value, got {actual}")
    } else {
        format!("for return: {}", mismatch(expected, actual))
    }
}

/// Message for a malformed descriptor, carrying its textual representation.
pub fn signature(descriptor: &Value) -> String {
    format!("unknown type descriptor: {descriptor}")
}
