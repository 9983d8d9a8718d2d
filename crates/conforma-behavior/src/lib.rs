//! Standard behavior combinators.
//!
//! Everything here is an ordinary implementation of the kernel's
//! [`Behavior`](conforma_kernel::Behavior) extension point: no combinator
//! has access that a host's own behaviors would lack. Each delegates nested
//! descriptors back to [`conforms`](conforma_kernel::conforms), so
//! signature errors and raised predicate errors propagate through
//! combinators unchanged.
//!
//! The free functions (`all`, `any_of`, `one_of`, `not`, `nilable`,
//! `typed_seq`) wrap each combinator directly as a descriptor
//! [`Value`](conforma_kernel::Value).

mod logic;
mod nilable;
mod seq;

pub use logic::{All, AnyOf, Not, OneOf, all, any_of, not, one_of};
pub use nilable::{Nilable, nilable};
pub use seq::{TypedSeq, typed_seq};
