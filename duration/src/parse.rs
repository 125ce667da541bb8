//! String parser: numeric literals and compound duration strings.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};
use crate::seconds::{Seconds, Source};
use crate::unit::Unit;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*\.[0-9]*$").unwrap());

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Parses a duration source into seconds.
///
/// Numbers pass through unchanged, rationals become floating point, and
/// strings are read as an integer literal (`"12"`), a decimal literal
/// (`"0.4"`, `".5"`, `"5."`) or a compound duration string
/// (`"1m 10s 500ms"`).
///
/// A compound string yields [`Seconds::Int`] unless it contains an `ms`,
/// `us` or `ns` token.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for empty or malformed strings,
/// literals that overflow, and rationals with a zero denominator.
///
/// # Example
///
/// ```rust
/// use giztoy_duration::{parse, Seconds};
///
/// assert_eq!(parse("1m 10s").unwrap(), Seconds::Int(70));
/// assert_eq!(parse("1m 10s 500ms").unwrap(), Seconds::Real(70.5));
/// assert!(parse("").is_err());
/// ```
pub fn parse<'a>(source: impl Into<Source<'a>>) -> Result<Seconds> {
    match source.into() {
        Source::Int(v) => Ok(Seconds::Int(v)),
        Source::Real(v) => Ok(Seconds::Real(v)),
        Source::Ratio(num, den) => {
            if den == 0 {
                return Err(Error::invalid_argument("source", format!("{}/{}", num, den)));
            }
            Ok(Seconds::Real(num as f64 / den as f64))
        }
        Source::Str(s) => parse_str(s),
    }
}

/// Like [`parse`], passing `None` through unchanged.
pub fn parse_opt<'a, S: Into<Source<'a>>>(source: Option<S>) -> Result<Option<Seconds>> {
    source.map(|s| parse(s)).transpose()
}

/// Parses a string source. See [`parse`].
pub fn parse_str(s: &str) -> Result<Seconds> {
    if INTEGER.is_match(s) {
        return s
            .parse::<i64>()
            .map(Seconds::Int)
            .map_err(|_| invalid_source(s));
    }
    if DECIMAL.is_match(s) {
        // A lone dot reads as zero.
        if s == "." {
            return Ok(Seconds::Real(0.0));
        }
        return s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Seconds::Real)
            .ok_or_else(|| invalid_source(s));
    }
    let tokens = tokenize(s)?;
    accumulate(s, &tokens)
}

/// One `<digits><unit>` pair of a compound duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub count: u64,
    pub unit: Unit,
}

/// Splits a compound duration string into tokens.
///
/// Tokens may be followed by ASCII whitespace or a vertical tab; leading
/// whitespace and trailing digits without a unit are rejected.
pub(crate) fn tokenize(s: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = s;

    while !rest.is_empty() {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(invalid_source(s));
        }
        let count: u64 = rest[..digits].parse().map_err(|_| invalid_source(s))?;
        rest = &rest[digits..];

        let (unit, len) = Unit::match_suffix(rest).ok_or_else(|| invalid_source(s))?;
        rest = rest[len..].trim_start_matches(is_space);

        tokens.push(Token { count, unit });
    }

    if tokens.is_empty() {
        return Err(invalid_source(s));
    }
    Ok(tokens)
}

/// Sums tokens into whole seconds and sub-second nanoseconds.
///
/// Repeated or out-of-order units simply add up.
fn accumulate(s: &str, tokens: &[Token]) -> Result<Seconds> {
    let mut seconds: i64 = 0;
    let mut nanos: u128 = 0;
    let mut has_subseconds = false;

    for token in tokens {
        if token.unit.is_subsecond() {
            has_subseconds = true;
            nanos = nanos
                .checked_add(u128::from(token.count) * u128::from(token.unit.nanos()))
                .ok_or_else(|| invalid_source(s))?;
        } else {
            let per_unit = (token.unit.nanos() / NANOS_PER_SEC) as i64;
            seconds = i64::try_from(token.count)
                .ok()
                .and_then(|count| count.checked_mul(per_unit))
                .and_then(|v| seconds.checked_add(v))
                .ok_or_else(|| invalid_source(s))?;
        }
    }

    trace!(source = s, tokens = tokens.len(), seconds, nanos = %nanos, "parsed compound duration");

    if has_subseconds {
        Ok(Seconds::Real(seconds as f64 + nanos as f64 / NANOS_PER_SEC as f64))
    } else {
        Ok(Seconds::Int(seconds))
    }
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn invalid_source(s: &str) -> Error {
    Error::invalid_argument("source", format!("{:?}", s))
}

#[cfg(test)]
mod tokenize_tests {
    use super::*;

    fn units(s: &str) -> Vec<(u64, Unit)> {
        tokenize(s)
            .unwrap()
            .into_iter()
            .map(|t| (t.count, t.unit))
            .collect()
    }

    #[test]
    fn test_longest_suffix_wins() {
        assert_eq!(units("5ms"), vec![(5, Unit::Millisecond)]);
        assert_eq!(units("5m5s"), vec![(5, Unit::Minute), (5, Unit::Second)]);
        assert_eq!(
            units("1ms2us3ns"),
            vec![(1, Unit::Millisecond), (2, Unit::Microsecond), (3, Unit::Nanosecond)]
        );
    }

    #[test]
    fn test_whitespace_between_tokens() {
        assert_eq!(units("1h \t2m\n"), vec![(1, Unit::Hour), (2, Unit::Minute)]);
        assert_eq!(units("1m\x0b10s"), vec![(1, Unit::Minute), (10, Unit::Second)]);
        assert_eq!(units("1m\r\x0c10s"), vec![(1, Unit::Minute), (10, Unit::Second)]);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(tokenize("").is_err());
        assert!(tokenize(" 1s").is_err());
        assert!(tokenize("1m30").is_err());
        assert!(tokenize("1x").is_err());
        assert!(tokenize("m").is_err());
        assert!(tokenize("1 s").is_err());
        assert!(tokenize("99999999999999999999s").is_err());
    }
}
