//! Numeric durations in seconds and the inputs accepted by the parser.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::error::{Error, Result};

/// A number of seconds.
///
/// `Int` holds exact whole seconds; `Real` is used as soon as a value
/// carries a sub-second part. Serializes as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Seconds {
    Int(i64),
    Real(f64),
}

impl Seconds {
    /// Reports whether this is the exact-integer variant.
    pub fn is_integer(&self) -> bool {
        matches!(self, Seconds::Int(_))
    }

    /// Returns the value as floating-point seconds.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Seconds::Int(v) => v as f64,
            Seconds::Real(v) => v,
        }
    }

    /// Returns the integer value, if this is the `Int` variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Seconds::Int(v) => Some(v),
            Seconds::Real(_) => None,
        }
    }

    /// Reports whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        match *self {
            Seconds::Int(v) => v < 0,
            Seconds::Real(v) => v < 0.0,
        }
    }

    /// Converts to a [`std::time::Duration`].
    ///
    /// # Errors
    ///
    /// Negative, NaN or out-of-range values are rejected.
    pub fn to_std(&self) -> Result<StdDuration> {
        match *self {
            Seconds::Int(v) => u64::try_from(v)
                .map(StdDuration::from_secs)
                .map_err(|_| Error::invalid_argument("value", v.to_string())),
            Seconds::Real(v) => StdDuration::try_from_secs_f64(v)
                .map_err(|_| Error::invalid_argument("value", v.to_string())),
        }
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seconds::Int(v) => write!(f, "{}", v),
            Seconds::Real(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for Seconds {
    fn from(v: i64) -> Self {
        Seconds::Int(v)
    }
}

impl From<i32> for Seconds {
    fn from(v: i32) -> Self {
        Seconds::Int(i64::from(v))
    }
}

impl From<u32> for Seconds {
    fn from(v: u32) -> Self {
        Seconds::Int(i64::from(v))
    }
}

impl From<f64> for Seconds {
    fn from(v: f64) -> Self {
        Seconds::Real(v)
    }
}

impl From<f32> for Seconds {
    fn from(v: f32) -> Self {
        Seconds::Real(f64::from(v))
    }
}

/// Whole-second durations become `Int`, anything finer becomes `Real`.
///
/// Durations beyond `i64::MAX` seconds fall back to `Real`.
impl From<StdDuration> for Seconds {
    fn from(d: StdDuration) -> Self {
        match i64::try_from(d.as_secs()) {
            Ok(secs) if d.subsec_nanos() == 0 => Seconds::Int(secs),
            _ => Seconds::Real(d.as_secs_f64()),
        }
    }
}

impl FromStr for Seconds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_str(s)
    }
}

/// A value accepted by [`parse`](crate::parse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// A numeric literal or compound duration string.
    Str(&'a str),
    /// An integer number of seconds, returned unchanged.
    Int(i64),
    /// A floating-point number of seconds, returned unchanged.
    Real(f64),
    /// A rational number of seconds (`numerator`, `denominator`),
    /// converted to floating point.
    Ratio(i64, i64),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(s: &'a str) -> Self {
        Source::Str(s)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(s: &'a String) -> Self {
        Source::Str(s.as_str())
    }
}

impl From<i64> for Source<'_> {
    fn from(v: i64) -> Self {
        Source::Int(v)
    }
}

impl From<i32> for Source<'_> {
    fn from(v: i32) -> Self {
        Source::Int(i64::from(v))
    }
}

impl From<f64> for Source<'_> {
    fn from(v: f64) -> Self {
        Source::Real(v)
    }
}

impl From<Seconds> for Source<'_> {
    fn from(v: Seconds) -> Self {
        match v {
            Seconds::Int(v) => Source::Int(v),
            Seconds::Real(v) => Source::Real(v),
        }
    }
}
