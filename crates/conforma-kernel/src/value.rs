//! The dynamic value model checked by the engine.
//!
//! `Value` plays both roles in a conformance check: it is the arbitrary
//! runtime datum being checked, and it is the grammar of type descriptors.
//! The descriptor-bearing variants (`Type`, `Pattern`, `Interval`,
//! `Predicate`, `Behavior`, plus `Symbol`, `Seq`, and the boolean literals)
//! become descriptors when they appear on the expected side of a check;
//! everything else on the expected side is a malformed descriptor.
//!
//! The engine never mutates a `Value`. Callables are shared behind
//! `Send + Sync` trait objects, so values can be checked concurrently as
//! long as the host's own objects tolerate it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::behavior::Behavior;
use crate::error::TypeCheckError;
use crate::interval::Interval;
use crate::nominal::TypeRef;

/// An arbitrary host object embedded into the value model.
///
/// This is how a host exposes objects richer than the builtin data
/// variants. The engine only ever asks the questions below.
pub trait HostObject: Send + Sync {
    /// The host-side type name, matched by nominal descriptors.
    fn type_name(&self) -> &str;

    /// Capability probe: whether this object exposes the named operation.
    fn responds_to(&self, op: &str) -> bool;

    /// Canonical text form, used for pattern matching.
    fn text(&self) -> String {
        self.type_name().to_string()
    }

    /// Host objects are truthy unless they say otherwise.
    fn is_truthy(&self) -> bool {
        true
    }
}

type PredicateFn = dyn Fn(&Value) -> Result<Value, TypeCheckError> + Send + Sync;

/// A single-argument host callable used as a predicate descriptor.
///
/// The truthiness of the returned value is the conformance verdict. A
/// predicate may raise; the error propagates through the engine unchanged
/// (a re-entrant guarded call inside the predicate surfaces its own error
/// kind, not a conformance failure).
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new(f: impl Fn(&Value) -> Result<Value, TypeCheckError> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke with `value` as the sole argument.
    pub fn call(&self, value: &Value) -> Result<Value, TypeCheckError> {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// A single runtime datum of the host object system.
#[derive(Clone)]
pub enum Value {
    /// The explicit absent value. Always falsy.
    Nil,
    /// Boolean datum; as a descriptor, the truthy/falsy literal.
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An interned operation name; as a descriptor, a capability tag.
    Symbol(String),
    /// An ordered finite sequence; as a descriptor, a positional tuple.
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// A nominal type identity (descriptor).
    Type(TypeRef),
    /// A compiled text pattern (descriptor).
    Pattern(Regex),
    /// An interval with its own membership rule (descriptor).
    Interval(Interval),
    /// A single-argument callable (descriptor).
    Predicate(Predicate),
    /// A custom behavior object (descriptor); the engine's sole extension
    /// point for new descriptor kinds.
    Behavior(Arc<dyn Behavior>),
    /// An arbitrary host object behind the [`HostObject`] boundary.
    Object(Arc<dyn HostObject>),
}

impl Value {
    /// Shorthand for `Value::Str`.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Shorthand for `Value::Symbol`.
    pub fn symbol(s: impl Into<String>) -> Self {
        Self::Symbol(s.into())
    }

    /// Wrap a closure as a predicate descriptor.
    pub fn predicate(
        f: impl Fn(&Value) -> Result<Value, TypeCheckError> + Send + Sync + 'static,
    ) -> Self {
        Self::Predicate(Predicate::new(f))
    }

    /// Wrap a behavior object as a descriptor.
    pub fn behavior(b: impl Behavior + 'static) -> Self {
        Self::Behavior(Arc::new(b))
    }

    /// Embed a host object.
    pub fn object(o: impl HostObject + 'static) -> Self {
        Self::Object(Arc::new(o))
    }

    /// Whether this is the explicit absent value.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Truthiness: `Nil` and `false` are falsy, everything else truthy.
    /// Host objects decide for themselves.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Object(o) => o.is_truthy(),
            _ => true,
        }
    }

    /// Sequence protocol: the elements of an ordered sequence, or `None`
    /// for any non-sequence value.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Capability probe. Builtin data values expose no operations of their
    /// own; host objects answer through the [`HostObject`] boundary. Hosts
    /// with a richer method surface override this wholesale via their
    /// `ObjectModel`.
    pub fn responds_to(&self, op: &str) -> bool {
        match self {
            Self::Object(o) => o.responds_to(op),
            _ => false,
        }
    }

    /// Canonical text form used for pattern matching: strings and symbols
    /// unquoted, `Nil` empty, everything else its display form.
    pub fn to_text(&self) -> String {
        match self {
            Self::Nil => String::new(),
            Self::Str(s) => s.clone(),
            Self::Symbol(s) => s.clone(),
            Self::Object(o) => o.text(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    /// The inspect form used in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, ":{s}"),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Type(ty) => f.write_str(ty.name()),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Self::Interval(iv) => write!(f, "{iv}"),
            Self::Predicate(_) => f.write_str("a predicate"),
            Self::Behavior(b) => f.write_str(&b.describe()),
            Self::Object(o) => write!(f, "#<{}>", o.text()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "Type({})", ty.name()),
            Self::Behavior(b) => write!(f, "Behavior({})", b.describe()),
            Self::Object(o) => write!(f, "Object({})", o.type_name()),
            other => write!(f, "{other}"),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for data variants; identity for callables,
    /// behaviors, host objects, and nominal types.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) | (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Type(a), Self::Type(b)) => Arc::ptr_eq(a, b),
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::Predicate(a), Self::Predicate(b)) => Arc::ptr_eq(&a.0, &b.0),
            (Self::Behavior(a), Self::Behavior(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}

impl From<Interval> for Value {
    fn from(iv: Interval) -> Self {
        Self::Interval(iv)
    }
}

impl From<TypeRef> for Value {
    fn from(ty: TypeRef) -> Self {
        Self::Type(ty)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<serde_json::Value> for Value {
    /// Ingest JSON data as engine values. Numbers become `Int` when they
    /// fit in an `i64`, otherwise `Float`.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
