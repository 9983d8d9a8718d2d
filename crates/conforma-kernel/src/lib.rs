//! # Conforma kernel
//!
//! A runtime type-conformance engine: given a *type descriptor* and a live
//! value, decide whether the value conforms, and raise distinct,
//! categorized errors when guarding positional arguments, keyword
//! arguments, and return values.
//!
//! This crate is **host-agnostic**: it does not prescribe what the
//! embedding object system looks like. It only prescribes how values must
//! answer the engine's boundary questions, all routed through the
//! [`ObjectModel`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Value                  ← dynamic host datum (doubles as the descriptor grammar)
//!     │
//! classify               ← descriptor kind extraction (closed kind set)
//!     │
//! conforms               ← recursive boolean conformance engine
//!     │
//! assert_arguments       ← positional protocol (Nil = unconstrained)
//! assert_keyword_arguments ← keyword protocol (supplied keys only)
//! assert_return          ← return protocol (Nil = must be absent)
//!     │
//! TypeSignature          ← definition-time validation + guarded-call surface
//! ```
//!
//! The engine is synchronous, stateless per call, and never mutates a
//! descriptor or a value; it is safe to share across threads as long as
//! the host's own objects are.

pub mod assert;
pub mod behavior;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod interval;
pub mod message;
pub mod model;
pub mod nominal;
pub mod signature;
pub mod value;

pub use assert::{
    assert_arguments, assert_arguments_with_keywords, assert_keyword_arguments, assert_return,
};
pub use behavior::Behavior;
pub use descriptor::{Kind, classify};
pub use engine::conforms;
pub use error::{ArgPosition, TypeCheckError};
pub use interval::{Endpoint, Interval};
pub use model::{BasicModel, ObjectModel};
pub use nominal::{NominalType, TypeRef};
pub use signature::TypeSignature;
pub use value::{HostObject, Predicate, Value};
