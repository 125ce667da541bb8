//! Time units and inclusive unit ranges.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A time magnitude, ordered from nanoseconds up to weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl Unit {
    /// All units in ascending order.
    pub const ALL: [Unit; 8] = [
        Unit::Nanosecond,
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
    ];

    /// Returns the position of this unit in [`Unit::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a unit by its position in [`Unit::ALL`].
    pub fn from_index(index: usize) -> Result<Unit> {
        Unit::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::invalid_enum("unit", index.to_string()))
    }

    /// Returns the suffix used in duration strings.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Nanosecond => "ns",
            Unit::Microsecond => "us",
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
        }
    }

    /// Returns the length of one unit in nanoseconds.
    pub fn nanos(self) -> u64 {
        match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => 1_000,
            Unit::Millisecond => 1_000_000,
            Unit::Second => 1_000_000_000,
            Unit::Minute => 60 * 1_000_000_000,
            Unit::Hour => 60 * 60 * 1_000_000_000,
            Unit::Day => 24 * 60 * 60 * 1_000_000_000,
            Unit::Week => 7 * 24 * 60 * 60 * 1_000_000_000,
        }
    }

    /// Returns the length of one unit in seconds.
    pub fn seconds(self) -> f64 {
        match self {
            Unit::Nanosecond => 1e-9,
            Unit::Microsecond => 1e-6,
            Unit::Millisecond => 1e-3,
            Unit::Second => 1.0,
            Unit::Minute => 60.0,
            Unit::Hour => 3_600.0,
            Unit::Day => 86_400.0,
            Unit::Week => 604_800.0,
        }
    }

    /// Reports whether this unit is shorter than a second.
    pub fn is_subsecond(self) -> bool {
        self < Unit::Second
    }

    /// Matches the longest unit suffix at the start of `s`.
    ///
    /// Two-letter suffixes win, so `"ms"` never reads as minutes.
    pub(crate) fn match_suffix(s: &str) -> Option<(Unit, usize)> {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && bytes[1] == b's' {
            match bytes[0] {
                b'm' => return Some((Unit::Millisecond, 2)),
                b'u' => return Some((Unit::Microsecond, 2)),
                b'n' => return Some((Unit::Nanosecond, 2)),
                _ => {}
            }
        }
        let unit = match bytes.first()? {
            b'w' => Unit::Week,
            b'd' => Unit::Day,
            b'h' => Unit::Hour,
            b'm' => Unit::Minute,
            b's' => Unit::Second,
            _ => return None,
        };
        Some((unit, 1))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unit = match s {
            "ns" | "nanosecond" | "nanoseconds" => Unit::Nanosecond,
            "us" | "microsecond" | "microseconds" => Unit::Microsecond,
            "ms" | "millisecond" | "milliseconds" => Unit::Millisecond,
            "s" | "second" | "seconds" => Unit::Second,
            "m" | "minute" | "minutes" => Unit::Minute,
            "h" | "hour" | "hours" => Unit::Hour,
            "d" | "day" | "days" => Unit::Day,
            "w" | "week" | "weeks" => Unit::Week,
            _ => return Err(Error::invalid_enum("unit", s)),
        };
        Ok(unit)
    }
}

impl TryFrom<usize> for Unit {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Unit::from_index(index)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suffix())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An inclusive range of units selecting which magnitudes take part in
/// formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitRange {
    low: Unit,
    high: Unit,
}

impl UnitRange {
    /// Every unit, nanoseconds through weeks.
    pub const ALL: UnitRange = UnitRange {
        low: Unit::Nanosecond,
        high: Unit::Week,
    };

    /// Creates a range from `low` to `high`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `low` is above `high`.
    pub fn new(low: Unit, high: Unit) -> Result<Self> {
        if low > high {
            return Err(Error::invalid_argument("units", format!("{}..{}", low, high)));
        }
        Ok(Self { low, high })
    }

    /// Creates a range holding a single unit.
    pub fn single(unit: Unit) -> Self {
        Self {
            low: unit,
            high: unit,
        }
    }

    /// Returns the finest unit in the range.
    pub fn low(&self) -> Unit {
        self.low
    }

    /// Returns the coarsest unit in the range.
    pub fn high(&self) -> Unit {
        self.high
    }

    /// Reports whether `unit` lies inside the range.
    pub fn contains(&self, unit: Unit) -> bool {
        self.low <= unit && unit <= self.high
    }

    /// Iterates the units of the range in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Unit> {
        (self.low.index()..=self.high.index()).map(|i| Unit::ALL[i])
    }
}

impl Default for UnitRange {
    fn default() -> Self {
        Self {
            low: Unit::Second,
            high: Unit::Day,
        }
    }
}

impl TryFrom<RangeInclusive<Unit>> for UnitRange {
    type Error = Error;

    fn try_from(range: RangeInclusive<Unit>) -> Result<Self> {
        let (low, high) = range.into_inner();
        UnitRange::new(low, high)
    }
}

impl fmt::Display for UnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.low, self.high)
    }
}

/// Parses `"s..d"`, or a single unit such as `"ns"`.
impl FromStr for UnitRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once("..") {
            Some((low, high)) => {
                let high = high.strip_prefix('=').unwrap_or(high);
                UnitRange::new(low.trim().parse()?, high.trim().parse()?)
            }
            None => Ok(UnitRange::single(s.parse()?)),
        }
    }
}

impl Serialize for UnitRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UnitRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
