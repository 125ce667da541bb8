//! Error type for duration parsing and formatting.

use thiserror::Error;

/// Errors returned by [`parse`](crate::parse) and [`format`](crate::format).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument or option value was rejected.
    ///
    /// `name` identifies the argument (`"source"`, `"value"`) or option
    /// (`"units"`, `"empty"`, `"zeros"`, `"minus"`) and `value` is the
    /// offending input as the caller supplied it.
    #[error("invalid argument '{name}': {value}")]
    InvalidArgument { name: &'static str, value: String },

    /// A name or position did not match any enumerated constant.
    #[error("invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for duration operations.
pub type Result<T> = std::result::Result<T, Error>;
