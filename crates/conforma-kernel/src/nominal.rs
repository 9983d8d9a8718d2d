//! Nominal type identities and the instance-of relation.
//!
//! A nominal descriptor carries a [`TypeRef`]; membership is decided by the
//! type itself, so interface/structural membership is supported by
//! construction rather than bolted on. The builtins below cover the value
//! model's own data kinds; hosts add their own nominals by implementing
//! [`NominalType`].

use std::sync::Arc;

use crate::value::Value;

/// A type/interface identity usable as a nominal descriptor.
pub trait NominalType: Send + Sync {
    /// Name shown in descriptors and error messages.
    fn name(&self) -> &str;

    /// The instance-of relation for this type.
    fn is_instance(&self, value: &Value) -> bool;
}

/// Shared handle to a nominal type.
pub type TypeRef = Arc<dyn NominalType>;

/// A builtin nominal: a name plus a membership test over the value model.
///
/// Host objects match a builtin by `type_name` equality, so a host can
/// declare an object to *be* an `Integer` without converting it.
struct Builtin {
    name: &'static str,
    test: fn(&Value) -> bool,
}

impl NominalType for Builtin {
    fn name(&self) -> &str {
        self.name
    }

    fn is_instance(&self, value: &Value) -> bool {
        match value {
            Value::Object(o) => o.type_name() == self.name,
            other => (self.test)(other),
        }
    }
}

fn builtin(name: &'static str, test: fn(&Value) -> bool) -> TypeRef {
    Arc::new(Builtin { name, test })
}

/// Matches every value, including `Nil`.
pub fn any() -> TypeRef {
    Arc::new(Any)
}

struct Any;

impl NominalType for Any {
    fn name(&self) -> &str {
        "Any"
    }

    fn is_instance(&self, _value: &Value) -> bool {
        true
    }
}

/// Matches only the explicit absent value.
pub fn nil() -> TypeRef {
    builtin("Nil", Value::is_nil)
}

pub fn boolean() -> TypeRef {
    builtin("Boolean", |v| matches!(v, Value::Bool(_)))
}

pub fn integer() -> TypeRef {
    builtin("Integer", |v| matches!(v, Value::Int(_)))
}

pub fn float() -> TypeRef {
    builtin("Float", |v| matches!(v, Value::Float(_)))
}

/// Matches both integer and float values.
pub fn num() -> TypeRef {
    builtin("Num", |v| matches!(v, Value::Int(_) | Value::Float(_)))
}

pub fn text() -> TypeRef {
    builtin("Text", |v| matches!(v, Value::Str(_)))
}

pub fn symbol() -> TypeRef {
    builtin("Symbol", |v| matches!(v, Value::Symbol(_)))
}

pub fn seq() -> TypeRef {
    builtin("Seq", |v| matches!(v, Value::Seq(_)))
}

pub fn map() -> TypeRef {
    builtin("Map", |v| matches!(v, Value::Map(_)))
}

/// A structural interface: membership is "responds to every listed
/// operation".
pub fn interface(name: impl Into<String>, ops: impl IntoIterator<Item = &'static str>) -> TypeRef {
    Arc::new(Interface {
        name: name.into(),
        ops: ops.into_iter().map(String::from).collect(),
    })
}

struct Interface {
    name: String,
    ops: Vec<String>,
}

impl NominalType for Interface {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_instance(&self, value: &Value) -> bool {
        self.ops.iter().all(|op| value.responds_to(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::HostObject;

    #[test]
    fn builtins_match_their_kind() {
        assert!(integer().is_instance(&Value::Int(3)));
        assert!(!integer().is_instance(&Value::Float(3.0)));
        assert!(num().is_instance(&Value::Float(3.0)));
        assert!(text().is_instance(&Value::str("x")));
        assert!(!text().is_instance(&Value::symbol("x")));
        assert!(nil().is_instance(&Value::Nil));
        assert!(!nil().is_instance(&Value::Bool(false)));
        assert!(seq().is_instance(&Value::Seq(vec![])));
    }

    #[test]
    fn any_matches_everything() {
        assert!(any().is_instance(&Value::Nil));
        assert!(any().is_instance(&Value::Int(0)));
        assert!(any().is_instance(&Value::object(Door { open: false })));
    }

    struct Door {
        open: bool,
    }

    impl HostObject for Door {
        fn type_name(&self) -> &str {
            "Door"
        }

        fn responds_to(&self, op: &str) -> bool {
            matches!(op, "open" | "close") || (self.open && op == "walk_through")
        }
    }

    #[test]
    fn host_objects_match_by_type_name() {
        let door = Value::object(Door { open: false });
        assert!(builtin("Door", |_| false).is_instance(&door));
        assert!(!integer().is_instance(&door));
    }

    #[test]
    fn interface_membership_is_structural() {
        let openable = interface("Openable", ["open", "close"]);
        assert!(openable.is_instance(&Value::object(Door { open: false })));
        assert!(!openable.is_instance(&Value::Int(3)));

        let walkable = interface("Walkable", ["walk_through"]);
        assert!(walkable.is_instance(&Value::object(Door { open: true })));
        assert!(!walkable.is_instance(&Value::object(Door { open: false })));
    }
}
