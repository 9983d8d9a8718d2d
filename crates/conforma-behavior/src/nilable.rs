//! Optional values: `Nil` or a conforming value.

use conforma_kernel::{Behavior, ObjectModel, TypeCheckError, Value, conforms};

/// Conforms when the value is `Nil` or conforms to the wrapped descriptor.
///
/// This is the idiomatic way to express an optional argument type; the
/// bare `Nil` descriptor is reserved for "no constraint" in the argument
/// protocol and "no return value" in the return protocol.
#[derive(Debug)]
pub struct Nilable {
    inner: Value,
}

impl Behavior for Nilable {
    fn describe(&self) -> String {
        format!("nil or {}", self.inner)
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        if value.is_nil() {
            return Ok(true);
        }
        conforms(model, &self.inner, value)
    }
}

/// `Nil` or `descriptor`, as a descriptor value.
pub fn nilable(descriptor: Value) -> Value {
    Value::behavior(Nilable { inner: descriptor })
}
