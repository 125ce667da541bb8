//! Value formatter: seconds to compound duration strings.

use serde::Deserialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::policy::{EmptyPolicy, MinusPolicy, ZeroPolicy};
use crate::seconds::Seconds;
use crate::unit::{Unit, UnitRange};

/// 2^64, the first magnitude that no longer fits whole seconds in a `u64`.
const MAX_MAGNITUDE: f64 = 18_446_744_073_709_551_616.0;

/// Options for [`format`].
///
/// Deserializes from configuration using the textual forms of each field:
///
/// ```yaml
/// units: ms..h
/// empty: minor
/// zeros: fill
/// delim: " "
/// minus: "-"
/// ```
///
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Units taking part in the output. Default `s..d`.
    pub units: UnitRange,
    /// Handling of zero components. Default [`EmptyPolicy::Skip`].
    pub empty: EmptyPolicy,
    /// Padding of components. Default [`ZeroPolicy::Single`].
    pub zeros: ZeroPolicy,
    /// Separator placed between components. Default empty.
    pub delim: String,
    /// Handling of negative values. Default [`MinusPolicy::Ignore`].
    pub minus: MinusPolicy,
}

impl FormatOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit range.
    pub fn units(mut self, units: UnitRange) -> Self {
        self.units = units;
        self
    }

    /// Sets the empty-component policy.
    pub fn empty(mut self, empty: EmptyPolicy) -> Self {
        self.empty = empty;
        self
    }

    /// Sets the padding policy.
    pub fn zeros(mut self, zeros: ZeroPolicy) -> Self {
        self.zeros = zeros;
        self
    }

    /// Sets the component delimiter.
    pub fn delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = delim.into();
        self
    }

    /// Sets the negative-value policy.
    pub fn minus(mut self, minus: MinusPolicy) -> Self {
        self.minus = minus;
        self
    }

    /// Sets an option from its textual form.
    ///
    /// `name` is one of `units`, `empty`, `zeros`, `delim` or `minus`. For
    /// `minus`, `ignore` and `error` select a policy and any other text is
    /// used as a literal prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the option when the value
    /// is not recognized, or naming `option` when `name` is unknown.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "units" => self.units = value.parse().map_err(|_| invalid_option("units", value))?,
            "empty" => self.empty = value.parse().map_err(|_| invalid_option("empty", value))?,
            "zeros" => self.zeros = value.parse().map_err(|_| invalid_option("zeros", value))?,
            "delim" => self.delim = value.to_string(),
            "minus" => {
                self.minus = value
                    .parse()
                    .unwrap_or_else(|_| MinusPolicy::prefix(value))
            }
            _ => return Err(Error::invalid_argument("option", name)),
        }
        Ok(())
    }
}

fn invalid_option(name: &'static str, value: &str) -> Error {
    Error::invalid_argument(name, format!("{:?}", value))
}

/// Formats a number of seconds as a compound duration string.
///
/// The value is decomposed into the units of `options.units`, coarsest
/// first. Magnitude above the coarsest selected unit stays folded into it,
/// and whole seconds fold down into the coarsest unit when only sub-second
/// units are selected.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for NaN, infinite or too-large
/// values, and for negative values under [`MinusPolicy::Error`].
///
/// # Example
///
/// ```rust
/// use giztoy_duration::{format, FormatOptions, Unit, UnitRange};
///
/// assert_eq!(format(1000, &FormatOptions::default()).unwrap(), "16m40s");
///
/// let opts = FormatOptions::new()
///     .units(UnitRange::new(Unit::Second, Unit::Week).unwrap())
///     .delim(" ");
/// assert_eq!(format(1_000_000, &opts).unwrap(), "1w 4d 13h 46m 40s");
/// ```
pub fn format(value: impl Into<Seconds>, options: &FormatOptions) -> Result<String> {
    let value = value.into();
    let (whole, frac) = split(value)?;

    let negative = value.is_negative();
    if negative && matches!(options.minus, MinusPolicy::Error) {
        return Err(Error::invalid_argument("value", value.to_string()));
    }

    let components = decompose(whole, frac, options.units);
    trace!(%value, units = %options.units, ?components, "decomposed duration");

    let rendered = render(&components, options);
    if negative {
        Ok(options.minus.apply(rendered, &options.delim))
    } else {
        Ok(rendered)
    }
}

/// Like [`format`], passing `None` through unchanged.
pub fn format_opt<S: Into<Seconds>>(
    value: Option<S>,
    options: &FormatOptions,
) -> Result<Option<String>> {
    value.map(|v| format(v, options)).transpose()
}

/// Splits the absolute value into whole seconds and a fraction in `[0, 1)`.
fn split(value: Seconds) -> Result<(u64, f64)> {
    match value {
        Seconds::Int(v) => Ok((v.unsigned_abs(), 0.0)),
        Seconds::Real(v) => {
            let abs = v.abs();
            if !abs.is_finite() || abs >= MAX_MAGNITUDE {
                return Err(Error::invalid_argument("value", v.to_string()));
            }
            let whole = abs.trunc();
            Ok((whole as u64, abs - whole))
        }
    }
}

/// Breaks a magnitude into per-unit values, indexed by [`Unit::index`].
fn decompose(whole: u64, frac: f64, range: UnitRange) -> [u128; 8] {
    let mut c = [0u128; 8];
    let mut whole = u128::from(whole);

    if range.low() < Unit::Second {
        let mut nanos = (frac * 1e9).round() as u128;
        if nanos >= 1_000_000_000 {
            whole += 1;
            nanos -= 1_000_000_000;
        }
        c[Unit::Millisecond.index()] = nanos / 1_000_000;
        c[Unit::Microsecond.index()] = nanos / 1_000 % 1_000;
        c[Unit::Nanosecond.index()] = nanos % 1_000;
    }
    c[Unit::Second.index()] = whole;

    // Carry upward while the next coarser unit is selected.
    for (unit, capacity) in [(Unit::Minute, 60), (Unit::Hour, 60), (Unit::Day, 24), (Unit::Week, 7)] {
        if range.high() < unit {
            break;
        }
        let below = unit.index() - 1;
        c[unit.index()] = c[below] / capacity;
        c[below] %= capacity;
    }

    // Fold downward into the coarsest selected sub-second unit.
    for (from, into) in [
        (Unit::Second, Unit::Millisecond),
        (Unit::Millisecond, Unit::Microsecond),
        (Unit::Microsecond, Unit::Nanosecond),
    ] {
        if range.high() < from {
            c[into.index()] += c[from.index()] * 1_000;
            c[from.index()] = 0;
        }
    }

    c
}

fn render(components: &[u128; 8], options: &FormatOptions) -> String {
    let mut parts = Vec::new();
    let mut emitted = false;

    for unit in options.units.iter().rev() {
        let value = components[unit.index()];
        if value == 0 {
            match options.empty {
                EmptyPolicy::Skip => continue,
                EmptyPolicy::Minor if !emitted => continue,
                _ => {}
            }
        }
        emitted = true;
        parts.push(format!("{}{}", options.zeros.render(value, unit), unit.suffix()));
    }

    parts.join(options.delim.as_str()).trim().to_string()
}
