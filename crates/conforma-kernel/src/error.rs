//! Error kinds raised by the assertion protocols.
//!
//! Three kinds, mirroring the three ways a guarded call can go wrong:
//!
//! - **Signature**: the descriptor itself is malformed. A bug in the
//!   guard's author, surfaced immediately and never retried.
//! - **ArgumentType**: a supplied positional or keyword value failed
//!   conformance. Aborts the call before its body runs.
//! - **ReturnType**: the guarded function's own result failed conformance,
//!   or a result was present when none was expected (and vice versa).
//!
//! A fourth variant, `Raised`, is not an engine verdict at all: it is the
//! transparent carrier for whatever a predicate or behavior invocation
//! raised on its own. Such errors pass through the engine unchanged.

use serde::{Deserialize, Serialize};

/// Where a failing argument sat in the guarded call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgPosition {
    /// 0-based positional index.
    Index(usize),
    /// Keyword argument name.
    Key(String),
}

impl std::fmt::Display for ArgPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "argument {i}"),
            Self::Key(k) => write!(f, "keyword argument '{k}'"),
        }
    }
}

/// Errors raised by the conformance engine and the assertion protocols.
///
/// No variant is ever caught or retried internally: the first failure in a
/// protocol call propagates immediately, short-circuiting the remaining
/// checks.
#[derive(Debug, thiserror::Error)]
pub enum TypeCheckError {
    /// The descriptor itself is malformed (unrecognized kind).
    #[error("type signature error: {message}")]
    Signature { message: String },

    /// A positional or keyword value failed conformance.
    #[error("argument type error: {message}")]
    ArgumentType {
        at: ArgPosition,
        message: String,
    },

    /// The guarded function's result failed conformance.
    #[error("return type error: {message}")]
    ReturnType { message: String },

    /// An error raised inside a predicate or behavior invocation.
    ///
    /// Never produced by the engine itself; invocation errors are not
    /// reinterpreted as conformance failures.
    #[error("{0}")]
    Raised(Box<dyn std::error::Error + Send + Sync>),
}

impl TypeCheckError {
    /// A signature error with the given message.
    pub fn signature(message: impl Into<String>) -> Self {
        Self::Signature {
            message: message.into(),
        }
    }

    /// Wrap a host-side error raised out of an invocation.
    pub fn raised(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Raised(Box::new(err))
    }
}
