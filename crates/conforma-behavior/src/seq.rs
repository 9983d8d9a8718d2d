//! Homogeneous sequences of any length.

use conforma_kernel::{Behavior, ObjectModel, TypeCheckError, Value, conforms};

/// Conforms when the value is a sequence whose every element conforms to
/// one element descriptor.
///
/// Unlike the tuple descriptor, length is unconstrained; the empty
/// sequence always conforms.
#[derive(Debug)]
pub struct TypedSeq {
    element: Value,
}

impl Behavior for TypedSeq {
    fn describe(&self) -> String {
        format!("a sequence of {}", self.element)
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        let Some(items) = value.as_seq() else {
            return Ok(false);
        };
        for item in items {
            if !conforms(model, &self.element, item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// A sequence of `element`, as a descriptor value.
pub fn typed_seq(element: Value) -> Value {
    Value::behavior(TypedSeq { element })
}
