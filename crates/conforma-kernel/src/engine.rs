//! The recursive conformance engine.
//!
//! One polymorphic decision procedure over the classified descriptor
//! kinds. It returns a boolean verdict; the only errors it produces itself
//! are signature errors for malformed descriptors. Errors raised out of
//! predicate/behavior invocations pass through unchanged.

use crate::descriptor::{Kind, classify};
use crate::error::TypeCheckError;
use crate::model::ObjectModel;
use crate::value::Value;

/// Whether `value` conforms to the descriptor `expected`.
///
/// Recursion depth equals nested tuple depth (plus whatever behaviors and
/// predicates re-enter); no explicit bound is imposed.
///
/// # Errors
///
/// - [`TypeCheckError::Signature`] when `expected` is not a descriptor.
///   This is fatal and deliberate: a malformed descriptor is a bug in the
///   guard's author, not a bad input from the caller.
/// - Whatever a predicate or behavior invocation raises, unmodified.
pub fn conforms(
    model: &dyn ObjectModel,
    expected: &Value,
    value: &Value,
) -> Result<bool, TypeCheckError> {
    let kind = classify(expected)
        .ok_or_else(|| TypeCheckError::signature(model.signature_message(expected)))?;

    Ok(match kind {
        Kind::Nominal(ty) => model.is_instance(ty, value),
        Kind::Capability(op) => model.responds_to(value, op),
        Kind::Pattern(re) => re.is_match(&model.text_of(value)),
        Kind::Tuple(expected_items) => match value.as_seq() {
            Some(items) if items.len() == expected_items.len() => {
                let mut all = true;
                for (e, v) in expected_items.iter().zip(items) {
                    if !conforms(model, e, v)? {
                        all = false;
                        break;
                    }
                }
                all
            }
            // Not a sequence, or lengths differ: a plain conformance
            // failure, never an error.
            _ => false,
        },
        Kind::Literal(want) => value.is_truthy() == want,
        Kind::Interval(iv) => iv.contains(value),
        Kind::Predicate(p) => p.call(value)?.is_truthy(),
        Kind::Behavior(b) => b.check(model, value)?,
    })
}
