//! Boolean combinators over nested descriptors.

use conforma_kernel::{Behavior, ObjectModel, TypeCheckError, Value, conforms};

fn render(parts: &[Value]) -> String {
    let rendered: Vec<String> = parts.iter().map(Value::to_string).collect();
    rendered.join(", ")
}

/// Conforms iff every sub-descriptor conforms.
#[derive(Debug)]
pub struct All {
    parts: Vec<Value>,
}

impl Behavior for All {
    fn describe(&self) -> String {
        format!("all of [{}]", render(&self.parts))
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        for part in &self.parts {
            if !conforms(model, part, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Conforms iff at least one sub-descriptor conforms.
#[derive(Debug)]
pub struct AnyOf {
    parts: Vec<Value>,
}

impl Behavior for AnyOf {
    fn describe(&self) -> String {
        format!("any of [{}]", render(&self.parts))
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        for part in &self.parts {
            if conforms(model, part, value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Conforms iff exactly one sub-descriptor conforms.
#[derive(Debug)]
pub struct OneOf {
    parts: Vec<Value>,
}

impl Behavior for OneOf {
    fn describe(&self) -> String {
        format!("exactly one of [{}]", render(&self.parts))
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        let mut hits = 0usize;
        for part in &self.parts {
            if conforms(model, part, value)? {
                hits += 1;
                if hits > 1 {
                    return Ok(false);
                }
            }
        }
        Ok(hits == 1)
    }
}

/// Conforms iff no sub-descriptor conforms.
#[derive(Debug)]
pub struct Not {
    parts: Vec<Value>,
}

impl Behavior for Not {
    fn describe(&self) -> String {
        format!("none of [{}]", render(&self.parts))
    }

    fn check(&self, model: &dyn ObjectModel, value: &Value) -> Result<bool, TypeCheckError> {
        for part in &self.parts {
            if conforms(model, part, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// All of the given descriptors, as a descriptor value.
pub fn all(parts: impl IntoIterator<Item = Value>) -> Value {
    Value::behavior(All {
        parts: parts.into_iter().collect(),
    })
}

/// At least one of the given descriptors, as a descriptor value.
pub fn any_of(parts: impl IntoIterator<Item = Value>) -> Value {
    Value::behavior(AnyOf {
        parts: parts.into_iter().collect(),
    })
}

/// Exactly one of the given descriptors, as a descriptor value.
pub fn one_of(parts: impl IntoIterator<Item = Value>) -> Value {
    Value::behavior(OneOf {
        parts: parts.into_iter().collect(),
    })
}

/// None of the given descriptors, as a descriptor value.
pub fn not(parts: impl IntoIterator<Item = Value>) -> Value {
    Value::behavior(Not {
        parts: parts.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use conforma_kernel::{BasicModel, Interval, nominal};

    fn check(descriptor: &Value, value: &Value) -> Result<bool, TypeCheckError> {
        conforms(&BasicModel, descriptor, value)
    }

    #[test]
    fn all_requires_every_part() {
        let positive_int = all([
            Value::Type(nominal::integer()),
            Value::Interval(Interval::at_least(1)),
        ]);
        assert!(check(&positive_int, &Value::Int(3)).unwrap());
        assert!(!check(&positive_int, &Value::Int(0)).unwrap());
        assert!(!check(&positive_int, &Value::Float(3.0)).unwrap());
    }

    #[test]
    fn any_of_requires_one_part() {
        let num_or_text = any_of([Value::Type(nominal::num()), Value::Type(nominal::text())]);
        assert!(check(&num_or_text, &Value::Int(3)).unwrap());
        assert!(check(&num_or_text, &Value::str("three")).unwrap());
        assert!(!check(&num_or_text, &Value::symbol("three")).unwrap());
    }

    #[test]
    fn one_of_rejects_multiple_hits() {
        let exactly_one = one_of([
            Value::Type(nominal::integer()),
            Value::Interval(Interval::at_least(0)),
        ]);
        // Matches both parts: rejected.
        assert!(!check(&exactly_one, &Value::Int(5)).unwrap());
        // Matches only the integer part.
        assert!(check(&exactly_one, &Value::Int(-5)).unwrap());
        // Matches only the interval part.
        assert!(check(&exactly_one, &Value::Float(5.0)).unwrap());
        assert!(!check(&exactly_one, &Value::str("5")).unwrap());
    }

    #[test]
    fn not_negates() {
        let not_nil = not([Value::Type(nominal::nil())]);
        assert!(check(&not_nil, &Value::Int(1)).unwrap());
        assert!(!check(&not_nil, &Value::Nil).unwrap());
    }

    #[test]
    fn combinators_nest() {
        let odd_text_or_small_int = any_of([
            all([
                Value::Type(nominal::integer()),
                Value::Interval(Interval::half_open(0, 10)),
            ]),
            Value::Type(nominal::text()),
        ]);
        assert!(check(&odd_text_or_small_int, &Value::Int(5)).unwrap());
        assert!(check(&odd_text_or_small_int, &Value::str("five")).unwrap());
        assert!(!check(&odd_text_or_small_int, &Value::Int(50)).unwrap());
    }

    #[test]
    fn malformed_parts_raise_through_combinators() {
        let broken = not([Value::Int(3)]);
        let err = check(&broken, &Value::Int(1)).unwrap_err();
        assert!(matches!(err, TypeCheckError::Signature { .. }));

        let broken = any_of([Value::Type(nominal::text()), Value::Int(3)]);
        // First part fails to match, second is malformed: the signature
        // error surfaces rather than a false verdict.
        let err = check(&broken, &Value::Int(1)).unwrap_err();
        assert!(matches!(err, TypeCheckError::Signature { .. }));
    }

    #[test]
    fn describe_names_the_parts() {
        let d = all([Value::Type(nominal::integer()), Value::Bool(true)]);
        assert_eq!(d.to_string(), "all of [Integer, true]");
    }
}
