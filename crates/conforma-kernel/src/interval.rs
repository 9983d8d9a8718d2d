//! Interval descriptors and their membership rule.
//!
//! An interval carries an optional lower and upper endpoint; a missing
//! endpoint leaves that side unbounded. Membership is evaluated by the
//! interval itself: numeric endpoints admit both integer and float values
//! (cross-kind comparison goes through f64), string endpoints compare
//! lexicographically against string values. A value of any other kind is
//! simply not contained — never an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One end of an interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Endpoint {
    /// Ordering of this endpoint relative to `value`, or `None` when the
    /// two are not comparable.
    fn cmp_value(&self, value: &Value) -> Option<Ordering> {
        match (self, value) {
            (Endpoint::Int(e), Value::Int(v)) => Some(e.cmp(v)),
            (Endpoint::Int(e), Value::Float(v)) => (*e as f64).partial_cmp(v),
            (Endpoint::Float(e), Value::Int(v)) => e.partial_cmp(&(*v as f64)),
            (Endpoint::Float(e), Value::Float(v)) => e.partial_cmp(v),
            (Endpoint::Str(e), Value::Str(v)) => Some(e.as_str().cmp(v.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Endpoint {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Endpoint {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// An interval descriptor with possibly open ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower endpoint, always inclusive. `None` leaves the side unbounded.
    pub start: Option<Endpoint>,

    /// Upper endpoint. `None` leaves the side unbounded.
    pub end: Option<Endpoint>,

    /// Whether the upper endpoint is excluded from the interval.
    pub exclusive_end: bool,
}

impl Interval {
    /// `start..=end`.
    pub fn closed(start: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            exclusive_end: false,
        }
    }

    /// `start..end`.
    pub fn half_open(start: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            exclusive_end: true,
        }
    }

    /// `start..`, unbounded above.
    pub fn at_least(start: impl Into<Endpoint>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
            exclusive_end: false,
        }
    }

    /// `..=end`, unbounded below.
    pub fn at_most(end: impl Into<Endpoint>) -> Self {
        Self {
            start: None,
            end: Some(end.into()),
            exclusive_end: false,
        }
    }

    /// `..end`, unbounded below with the endpoint excluded.
    pub fn below(end: impl Into<Endpoint>) -> Self {
        Self {
            start: None,
            end: Some(end.into()),
            exclusive_end: true,
        }
    }

    /// The interval's own membership rule.
    pub fn contains(&self, value: &Value) -> bool {
        if let Some(start) = &self.start {
            match start.cmp_value(value) {
                Some(Ordering::Less | Ordering::Equal) => {}
                _ => return false,
            }
        }
        if let Some(end) = &self.end {
            let ord = end.cmp_value(value);
            let ok = if self.exclusive_end {
                matches!(ord, Some(Ordering::Greater))
            } else {
                matches!(ord, Some(Ordering::Greater | Ordering::Equal))
            };
            if !ok {
                return false;
            }
        }
        // A fully open interval constrains nothing it can compare; values
        // of non-comparable kinds were already rejected by the endpoints.
        self.start.is_some() || self.end.is_some()
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        match (&self.end, self.exclusive_end) {
            (None, _) => write!(f, ".."),
            (Some(end), true) => write!(f, "..{end}"),
            (Some(end), false) => write!(f, "..={end}"),
        }
    }
}
