//! Duration type with human-readable serialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::error::{Error, Result};
use crate::format::{format, FormatOptions};
use crate::parse::parse_str;
use crate::policy::MinusPolicy;
use crate::seconds::Seconds;
use crate::unit::UnitRange;

/// A duration that serializes to a compound string (e.g. `"1m10s500ms"`)
/// and deserializes from a duration string, an integer or a float of
/// seconds.
///
/// Use `Option<HumanDuration>` for settings that may be unset.
///
/// Equality compares the length of the duration, so `5.0` seconds equals
/// `5` seconds.
#[derive(Debug, Clone, Copy)]
pub struct HumanDuration(Seconds);

impl HumanDuration {
    /// Creates a new HumanDuration from seconds.
    pub fn new(seconds: impl Into<Seconds>) -> Self {
        Self(seconds.into())
    }

    /// Creates a HumanDuration from whole seconds.
    pub fn from_secs(secs: i64) -> Self {
        Self(Seconds::Int(secs))
    }

    /// Returns the underlying seconds value.
    pub fn seconds(&self) -> Seconds {
        self.0
    }

    /// Returns the duration as floating-point seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_f64()
    }

    /// Converts to a std::time::Duration. Fails for negative values.
    pub fn to_std(&self) -> Result<StdDuration> {
        self.0.to_std()
    }

    /// Returns true if this duration is zero.
    pub fn is_zero(&self) -> bool {
        self.0.as_f64() == 0.0
    }

    /// Renders the duration with every unit from weeks to nanoseconds,
    /// `"0s"` for zero.
    ///
    /// Negative values are rejected since the parser does not read them
    /// back.
    pub fn to_duration_string(&self) -> Result<String> {
        let s = format(self.0, &serial_options())?;
        if s.is_empty() {
            return Ok("0s".to_string());
        }
        Ok(s)
    }
}

fn serial_options() -> FormatOptions {
    FormatOptions::new()
        .units(UnitRange::ALL)
        .minus(MinusPolicy::Error)
}

impl Default for HumanDuration {
    fn default() -> Self {
        Self(Seconds::Int(0))
    }
}

impl PartialEq for HumanDuration {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Seconds::Int(a), Seconds::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

/// Renders like [`to_duration_string`](HumanDuration::to_duration_string),
/// except that negative values get a leading `-`.
///
/// The `-` form is for display only: [`FromStr`] and deserialization
/// reject it.
impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = FormatOptions::new()
            .units(UnitRange::ALL)
            .minus(MinusPolicy::prefix("-"));
        match format(self.0, &opts) {
            Ok(s) if s.is_empty() => f.write_str("0s"),
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}s", self.0),
        }
    }
}

impl FromStr for HumanDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s).map(Self)
    }
}

impl Serialize for HumanDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = self.to_duration_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for HumanDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HumanDurationVisitor;

        impl<'de> serde::de::Visitor<'de> for HumanDurationVisitor {
            type Value = HumanDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string (e.g., '1m 10s') or a number of seconds")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                parse_str(v).map(HumanDuration).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                Ok(HumanDuration(Seconds::Int(v)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                i64::try_from(v)
                    .map(|v| HumanDuration(Seconds::Int(v)))
                    .map_err(|_| E::custom(format_args!("duration out of range: {}", v)))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
                Ok(HumanDuration(Seconds::Real(v)))
            }
        }

        deserializer.deserialize_any(HumanDurationVisitor)
    }
}

impl From<Seconds> for HumanDuration {
    fn from(s: Seconds) -> Self {
        Self(s)
    }
}

impl From<HumanDuration> for Seconds {
    fn from(d: HumanDuration) -> Self {
        d.0
    }
}

impl From<StdDuration> for HumanDuration {
    fn from(d: StdDuration) -> Self {
        Self(Seconds::from(d))
    }
}

impl TryFrom<HumanDuration> for StdDuration {
    type Error = Error;

    fn try_from(d: HumanDuration) -> Result<Self> {
        d.to_std()
    }
}
