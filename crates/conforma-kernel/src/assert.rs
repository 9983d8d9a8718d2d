//! The three assertion protocols built on the conformance engine.
//!
//! A guarded call gathers its positional values, keyword values, and later
//! its return value, then runs these protocols in sequence. Each protocol
//! raises on the first mismatch — failures are never aggregated — and
//! `Nil` expected descriptors mean "no constraint" for arguments but "no
//! return value expected" for returns. That asymmetry is deliberate.

use std::collections::BTreeMap;

use crate::engine::conforms;
use crate::error::{ArgPosition, TypeCheckError};
use crate::model::ObjectModel;
use crate::value::Value;

/// Check positional values against their expected descriptors.
///
/// `Nil` at an expected index leaves that position unconstrained. Indices
/// beyond the actual sequence read as `Nil`, so a trailing omitted argument
/// is checked like an explicit `Nil`. Actual values beyond the expected
/// sequence are never checked.
///
/// # Errors
///
/// [`TypeCheckError::ArgumentType`] identifying the 0-based index of the
/// first mismatch; signature and invocation errors propagate from the
/// engine.
pub fn assert_arguments(
    model: &dyn ObjectModel,
    expected: &[Value],
    actual: &[Value],
) -> Result<(), TypeCheckError> {
    for (index, descriptor) in expected.iter().enumerate() {
        if descriptor.is_nil() {
            continue;
        }
        let value = actual.get(index).unwrap_or(&Value::Nil);
        if !conforms(model, descriptor, value)? {
            return Err(TypeCheckError::ArgumentType {
                at: ArgPosition::Index(index),
                message: model.argument_message(index, descriptor, value),
            });
        }
    }
    Ok(())
}

/// Check supplied keyword values against their expected descriptors.
///
/// Only keys present in `actual` are checked; a key in `expected` that the
/// caller never supplied is not this engine's concern (required-ness
/// belongs to the interception layer). A `Nil` expected entry leaves the
/// key unconstrained.
///
/// # Errors
///
/// [`TypeCheckError::ArgumentType`] identifying the key of the first
/// mismatch.
pub fn assert_keyword_arguments(
    model: &dyn ObjectModel,
    expected: &BTreeMap<String, Value>,
    actual: &BTreeMap<String, Value>,
) -> Result<(), TypeCheckError> {
    for (key, value) in actual {
        let Some(descriptor) = expected.get(key) else {
            continue;
        };
        if descriptor.is_nil() {
            continue;
        }
        if !conforms(model, descriptor, value)? {
            return Err(TypeCheckError::ArgumentType {
                at: ArgPosition::Key(key.clone()),
                message: model.keyword_message(key, descriptor, value),
            });
        }
    }
    Ok(())
}

/// Positional protocol first, then keywords; the first error aborts.
pub fn assert_arguments_with_keywords(
    model: &dyn ObjectModel,
    expected_args: &[Value],
    args: &[Value],
    expected_kwargs: &BTreeMap<String, Value>,
    kwargs: &BTreeMap<String, Value>,
) -> Result<(), TypeCheckError> {
    assert_arguments(model, expected_args, args)?;
    assert_keyword_arguments(model, expected_kwargs, kwargs)
}

/// Check the guarded function's result.
///
/// A `Nil` expected descriptor means "no return value expected": the
/// actual value must itself be `Nil`. Anything else delegates to the
/// engine. Note the asymmetry with [`assert_arguments`], where `Nil`
/// means unconstrained.
///
/// # Errors
///
/// [`TypeCheckError::ReturnType`] on mismatch; signature and invocation
/// errors propagate from the engine.
pub fn assert_return(
    model: &dyn ObjectModel,
    expected: &Value,
    actual: &Value,
) -> Result<(), TypeCheckError> {
    let ok = if expected.is_nil() {
        actual.is_nil()
    } else {
        conforms(model, expected, actual)?
    };
    if ok {
        Ok(())
    } else {
        Err(TypeCheckError::ReturnType {
            message: model.return_message(expected, actual),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicModel;
    use crate::nominal;

    fn kw(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn nil_positions_are_unconstrained() {
        let expected = [Value::Nil, Value::Type(nominal::text())];
        assert_arguments(&BasicModel, &expected, &[Value::Int(42), Value::str("ok")]).unwrap();
    }

    #[test]
    fn first_mismatch_identifies_its_index() {
        let expected = [Value::Nil, Value::Type(nominal::text())];
        let err =
            assert_arguments(&BasicModel, &expected, &[Value::Int(42), Value::Int(7)]).unwrap_err();
        match err {
            TypeCheckError::ArgumentType { at, message } => {
                assert_eq!(at, ArgPosition::Index(1));
                assert_eq!(message, "for argument 1: expected Text, got 7");
            }
            other => panic!("expected an argument type error, got {other}"),
        }
    }

    #[test]
    fn missing_positions_read_as_nil() {
        let expected = [Value::Type(nominal::integer())];
        let err = assert_arguments(&BasicModel, &expected, &[]).unwrap_err();
        assert!(matches!(
            err,
            TypeCheckError::ArgumentType {
                at: ArgPosition::Index(0),
                ..
            }
        ));

        // But a falsy-literal descriptor accepts the absent value.
        assert_arguments(&BasicModel, &[Value::Bool(false)], &[]).unwrap();
    }

    #[test]
    fn extra_actual_values_are_not_checked() {
        let expected = [Value::Type(nominal::integer())];
        assert_arguments(
            &BasicModel,
            &expected,
            &[Value::Int(1), Value::str("ignored")],
        )
        .unwrap();
    }

    #[test]
    fn checks_abort_at_the_first_failure() {
        // Index 1 fails; the malformed descriptor at index 2 is never
        // reached, so no signature error surfaces.
        let expected = [
            Value::Type(nominal::integer()),
            Value::Type(nominal::text()),
            Value::Int(99),
        ];
        let actual = [Value::Int(1), Value::Int(2), Value::Int(3)];
        let err = assert_arguments(&BasicModel, &expected, &actual).unwrap_err();
        assert!(matches!(
            err,
            TypeCheckError::ArgumentType {
                at: ArgPosition::Index(1),
                ..
            }
        ));
    }

    #[test]
    fn keywords_only_checked_when_supplied() {
        let expected = kw(&[
            ("a", Value::Type(nominal::integer())),
            ("b", Value::Type(nominal::text())),
        ]);
        // `b` is missing from the actual mapping: unchecked, no error.
        assert_keyword_arguments(&BasicModel, &expected, &kw(&[("a", Value::Int(1))])).unwrap();
    }

    #[test]
    fn keyword_mismatch_identifies_its_key() {
        let expected = kw(&[("a", Value::Type(nominal::integer()))]);
        let err = assert_keyword_arguments(&BasicModel, &expected, &kw(&[("a", Value::str("1"))]))
            .unwrap_err();
        match err {
            TypeCheckError::ArgumentType { at, .. } => {
                assert_eq!(at, ArgPosition::Key("a".to_string()));
            }
            other => panic!("expected an argument type error, got {other}"),
        }
    }

    #[test]
    fn unexpected_keywords_pass_through() {
        let expected = kw(&[("a", Value::Type(nominal::integer()))]);
        let actual = kw(&[("a", Value::Int(1)), ("z", Value::str("anything"))]);
        assert_keyword_arguments(&BasicModel, &expected, &actual).unwrap();
    }

    #[test]
    fn positional_checks_run_before_keywords() {
        let expected_args = [Value::Type(nominal::integer())];
        let expected_kw = kw(&[("a", Value::Type(nominal::integer()))]);
        let err = assert_arguments_with_keywords(
            &BasicModel,
            &expected_args,
            &[Value::str("bad")],
            &expected_kw,
            &kw(&[("a", Value::str("also bad"))]),
        )
        .unwrap_err();
        // The positional failure wins.
        assert!(matches!(
            err,
            TypeCheckError::ArgumentType {
                at: ArgPosition::Index(0),
                ..
            }
        ));
    }

    #[test]
    fn return_nil_contract_requires_nil() {
        assert_return(&BasicModel, &Value::Nil, &Value::Nil).unwrap();

        let err = assert_return(&BasicModel, &Value::Nil, &Value::Int(5)).unwrap_err();
        match err {
            TypeCheckError::ReturnType { message } => {
                assert_eq!(message, "for return: expected no return value, got 5");
            }
            other => panic!("expected a return type error, got {other}"),
        }
    }

    #[test]
    fn return_descriptor_rejects_nil() {
        let err =
            assert_return(&BasicModel, &Value::Type(nominal::integer()), &Value::Nil).unwrap_err();
        assert!(matches!(err, TypeCheckError::ReturnType { .. }));

        assert_return(&BasicModel, &Value::Type(nominal::integer()), &Value::Int(5)).unwrap();
    }

    #[test]
    fn malformed_return_descriptor_is_a_signature_error() {
        let err = assert_return(&BasicModel, &Value::Int(3), &Value::Int(3)).unwrap_err();
        assert!(matches!(err, TypeCheckError::Signature { .. }));
    }
}
