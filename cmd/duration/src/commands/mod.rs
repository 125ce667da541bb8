//! CLI commands module.

mod format;
mod parse;
mod util;

pub use format::FormatCommand;
pub use parse::ParseCommand;

pub(crate) use util::*;
