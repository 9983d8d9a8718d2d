//! Per-call type signatures.
//!
//! A [`TypeSignature`] bundles the expected descriptors for one guarded
//! callable: positional, keyword, and return. The interception layer that
//! wraps methods and gathers live values is a host concern; this type only
//! offers the definition-time validation and the call/result assertion
//! sequence the engine side of a guarded call performs.

use std::collections::BTreeMap;

use crate::assert::{assert_arguments_with_keywords, assert_return};
use crate::descriptor::{Kind, classify};
use crate::error::TypeCheckError;
use crate::model::ObjectModel;
use crate::value::Value;

/// The expected shape of one guarded callable.
#[derive(Debug, Clone)]
pub struct TypeSignature {
    /// Positional descriptors; `Nil` entries are unconstrained positions.
    pub arguments: Vec<Value>,

    /// Keyword descriptors, checked only for keys the caller supplies.
    pub keywords: BTreeMap<String, Value>,

    /// Return descriptor; `Nil` means no return value is expected.
    pub ret: Value,
}

impl Default for TypeSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSignature {
    /// A signature expecting nothing: no constrained arguments and no
    /// return value.
    pub fn new() -> Self {
        Self {
            arguments: Vec::new(),
            keywords: BTreeMap::new(),
            ret: Value::Nil,
        }
    }

    /// Set the positional descriptors.
    pub fn args(mut self, arguments: impl IntoIterator<Item = Value>) -> Self {
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// Add a keyword descriptor.
    pub fn kwarg(mut self, key: impl Into<String>, descriptor: Value) -> Self {
        self.keywords.insert(key.into(), descriptor);
        self
    }

    /// Set the return descriptor.
    pub fn returning(mut self, descriptor: Value) -> Self {
        self.ret = descriptor;
        self
    }

    /// Definition-time validation: every non-`Nil` descriptor in the
    /// signature must classify, tuples recursively. This surfaces a
    /// malformed descriptor when the guard is written instead of at its
    /// first call.
    ///
    /// # Errors
    ///
    /// [`TypeCheckError::Signature`] naming the first malformed descriptor.
    pub fn validate(&self, model: &dyn ObjectModel) -> Result<(), TypeCheckError> {
        for descriptor in &self.arguments {
            if !descriptor.is_nil() {
                validate_descriptor(model, descriptor)?;
            }
        }
        for descriptor in self.keywords.values() {
            if !descriptor.is_nil() {
                validate_descriptor(model, descriptor)?;
            }
        }
        if !self.ret.is_nil() {
            validate_descriptor(model, &self.ret)?;
        }
        Ok(())
    }

    /// Assert a call's gathered values: positional protocol, then keywords.
    pub fn assert_call(
        &self,
        model: &dyn ObjectModel,
        args: &[Value],
        kwargs: &BTreeMap<String, Value>,
    ) -> Result<(), TypeCheckError> {
        assert_arguments_with_keywords(model, &self.arguments, args, &self.keywords, kwargs)
    }

    /// Assert the call's result against the return descriptor.
    pub fn assert_result(
        &self,
        model: &dyn ObjectModel,
        actual: &Value,
    ) -> Result<(), TypeCheckError> {
        assert_return(model, &self.ret, actual)
    }
}

fn validate_descriptor(model: &dyn ObjectModel, descriptor: &Value) -> Result<(), TypeCheckError> {
    match classify(descriptor) {
        Some(Kind::Tuple(items)) => {
            for item in items {
                validate_descriptor(model, item)?;
            }
            Ok(())
        }
        Some(_) => Ok(()),
        None => Err(TypeCheckError::signature(
            model.signature_message(descriptor),
        )),
    }
}
