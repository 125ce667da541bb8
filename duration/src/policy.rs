//! Formatting policies for empty components, zero padding and negative values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::unit::Unit;

/// Controls whether a component whose value is zero is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EmptyPolicy {
    /// Always emit the component.
    Force,
    /// Suppress zero components until the first component has been emitted.
    Minor,
    /// Never emit a zero component.
    #[default]
    Skip,
}

impl EmptyPolicy {
    /// All policies in declaration order.
    pub const ALL: [EmptyPolicy; 3] = [EmptyPolicy::Force, EmptyPolicy::Minor, EmptyPolicy::Skip];

    /// Looks up a policy by its position in [`EmptyPolicy::ALL`].
    pub fn from_index(index: usize) -> Result<EmptyPolicy> {
        EmptyPolicy::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::invalid_enum("empty policy", index.to_string()))
    }

    /// Returns the configuration name of the policy.
    pub fn as_str(self) -> &'static str {
        match self {
            EmptyPolicy::Force => "force",
            EmptyPolicy::Minor => "minor",
            EmptyPolicy::Skip => "skip",
        }
    }
}

impl FromStr for EmptyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "force" => Ok(EmptyPolicy::Force),
            "minor" => Ok(EmptyPolicy::Minor),
            "skip" => Ok(EmptyPolicy::Skip),
            _ => Err(Error::invalid_enum("empty policy", s)),
        }
    }
}

/// Controls the rendered width of each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ZeroPolicy {
    /// Pad with leading zeros.
    Fill,
    /// Pad with leading spaces.
    Align,
    /// No padding.
    #[default]
    Single,
}

impl ZeroPolicy {
    /// All policies in declaration order.
    pub const ALL: [ZeroPolicy; 3] = [ZeroPolicy::Fill, ZeroPolicy::Align, ZeroPolicy::Single];

    /// Looks up a policy by its position in [`ZeroPolicy::ALL`].
    pub fn from_index(index: usize) -> Result<ZeroPolicy> {
        ZeroPolicy::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::invalid_enum("zero policy", index.to_string()))
    }

    /// Returns the configuration name of the policy.
    pub fn as_str(self) -> &'static str {
        match self {
            ZeroPolicy::Fill => "fill",
            ZeroPolicy::Align => "align",
            ZeroPolicy::Single => "single",
        }
    }

    /// Renders `value` for `unit`.
    ///
    /// Seconds, minutes and hours are two digits wide, sub-second units
    /// three digits wide. Days and weeks are never padded.
    pub(crate) fn render(self, value: u128, unit: Unit) -> String {
        let width = match unit {
            Unit::Second | Unit::Minute | Unit::Hour => 2,
            Unit::Millisecond | Unit::Microsecond | Unit::Nanosecond => 3,
            Unit::Day | Unit::Week => 0,
        };
        match self {
            ZeroPolicy::Fill => format!("{:0>width$}", value),
            ZeroPolicy::Align => format!("{:>width$}", value),
            ZeroPolicy::Single => value.to_string(),
        }
    }
}

impl FromStr for ZeroPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fill" => Ok(ZeroPolicy::Fill),
            "align" => Ok(ZeroPolicy::Align),
            "single" => Ok(ZeroPolicy::Single),
            _ => Err(Error::invalid_enum("zero policy", s)),
        }
    }
}

/// A transform applied to the rendered magnitude of a negative value.
pub type MinusTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Controls how negative values are rendered.
#[derive(Clone, Default)]
pub enum MinusPolicy {
    /// Format the absolute value without a sign marker.
    #[default]
    Ignore,
    /// Reject negative values.
    Error,
    /// Prepend a literal marker, joined with the component delimiter.
    Prefix(String),
    /// Replace the rendered magnitude with the transform's output.
    Transform(MinusTransform),
}

impl MinusPolicy {
    /// Creates a [`MinusPolicy::Prefix`].
    pub fn prefix(marker: impl Into<String>) -> Self {
        MinusPolicy::Prefix(marker.into())
    }

    /// Creates a [`MinusPolicy::Transform`] from a closure.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        MinusPolicy::Transform(Arc::new(f))
    }

    /// Applies the policy to the rendered magnitude of a negative value.
    pub(crate) fn apply(&self, rendered: String, delim: &str) -> String {
        match self {
            MinusPolicy::Ignore | MinusPolicy::Error => rendered,
            MinusPolicy::Prefix(marker) => format!("{}{}{}", marker, delim, rendered),
            MinusPolicy::Transform(f) => f(&rendered),
        }
    }
}

impl fmt::Debug for MinusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinusPolicy::Ignore => write!(f, "Ignore"),
            MinusPolicy::Error => write!(f, "Error"),
            MinusPolicy::Prefix(marker) => f.debug_tuple("Prefix").field(marker).finish(),
            MinusPolicy::Transform(_) => write!(f, "Transform(..)"),
        }
    }
}

/// Accepts `ignore` and `error` only; literal prefixes are built with
/// [`MinusPolicy::prefix`].
impl FromStr for MinusPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ignore" => Ok(MinusPolicy::Ignore),
            "error" => Ok(MinusPolicy::Error),
            _ => Err(Error::invalid_enum("minus policy", s)),
        }
    }
}

macro_rules! impl_serde_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_serde_str!(EmptyPolicy);
impl_serde_str!(ZeroPolicy);

/// Reads `ignore`, `error`, or any other string as a literal prefix.
///
/// Transforms cannot come from configuration.
impl<'de> Deserialize<'de> for MinusPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(MinusPolicy::Prefix(s)))
    }
}
