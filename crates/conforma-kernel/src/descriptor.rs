//! Descriptor classification.
//!
//! A descriptor is an ordinary [`Value`] appearing on the expected side of
//! a check. [`classify`] extracts which of the fixed descriptor kinds it
//! represents — pure dispatch key extraction, no nested logic. The kind set
//! is closed and exhaustive; a value that classifies to `None` is a
//! *malformed descriptor*, which the engine reports as a signature error
//! rather than a conformance failure.

use std::sync::Arc;

use regex::Regex;

use crate::behavior::Behavior;
use crate::interval::Interval;
use crate::nominal::TypeRef;
use crate::value::{Predicate, Value};

/// The classified kind of a descriptor value.
pub enum Kind<'a> {
    /// Value must be an instance of the named type/interface.
    Nominal(&'a TypeRef),
    /// Value must expose an operation of this name.
    Capability(&'a str),
    /// Value's textual form must match this pattern.
    Pattern(&'a Regex),
    /// Value must be a sequence of this exact shape, position by position.
    Tuple(&'a [Value]),
    /// Value must be truthy (`true`) or falsy (`false`).
    Literal(bool),
    /// Value must lie within the interval.
    Interval(&'a Interval),
    /// The callable's verdict decides.
    Predicate(&'a Predicate),
    /// The behavior object's verdict decides.
    Behavior(&'a Arc<dyn Behavior>),
}

/// Classify a descriptor value, or `None` when it is not a descriptor.
///
/// `Nil` deliberately does not classify: "no constraint" is a policy of
/// the assertion protocols, not of the engine, and a bare `Nil` reaching
/// the engine is a malformed descriptor like any other non-descriptor
/// value.
pub fn classify(descriptor: &Value) -> Option<Kind<'_>> {
    match descriptor {
        Value::Type(ty) => Some(Kind::Nominal(ty)),
        Value::Symbol(op) => Some(Kind::Capability(op)),
        Value::Pattern(re) => Some(Kind::Pattern(re)),
        Value::Seq(items) => Some(Kind::Tuple(items)),
        Value::Bool(b) => Some(Kind::Literal(*b)),
        Value::Interval(iv) => Some(Kind::Interval(iv)),
        Value::Predicate(p) => Some(Kind::Predicate(p)),
        Value::Behavior(b) => Some(Kind::Behavior(b)),
        Value::Nil
        | Value::Int(_)
        | Value::Float(_)
        | Value::Str(_)
        | Value::Map(_)
        | Value::Object(_) => None,
    }
}
