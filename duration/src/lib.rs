//! Human-readable duration strings.
//!
//! This crate converts between compound duration strings and numbers of
//! seconds:
//!
//! - [`parse`]: `"1m 10s 500ms"` -> `70.5`
//! - [`format`]: `1000` -> `"16m40s"`, shaped by [`FormatOptions`]
//! - [`HumanDuration`]: a serde-friendly wrapper for configuration structs
//!
//! Recognized units are `w`, `d`, `h`, `m`, `s`, `ms`, `us` and `ns`.
//!
//! # Example
//!
//! ```rust
//! use giztoy_duration::{format, parse, EmptyPolicy, FormatOptions, Seconds, Unit, UnitRange, ZeroPolicy};
//!
//! // Compound strings without sub-second units stay integers
//! assert_eq!(parse("1m 10s").unwrap(), Seconds::Int(70));
//! assert_eq!(parse("0.4").unwrap(), Seconds::Real(0.4));
//!
//! // Formatting with padding and a sub-second range
//! let opts = FormatOptions::new()
//!     .units(UnitRange::new(Unit::Millisecond, Unit::Second).unwrap())
//!     .empty(EmptyPolicy::Minor)
//!     .zeros(ZeroPolicy::Fill);
//! assert_eq!(format(1, &opts).unwrap(), "01s000ms");
//! ```

mod error;
mod format;
mod human;
mod parse;
mod policy;
mod seconds;
mod unit;

pub use error::{Error, Result};
pub use format::{format, format_opt, FormatOptions};
pub use human::HumanDuration;
pub use parse::{parse, parse_opt, parse_str};
pub use policy::{EmptyPolicy, MinusPolicy, MinusTransform, ZeroPolicy};
pub use seconds::{Seconds, Source};
pub use unit::{Unit, UnitRange};
