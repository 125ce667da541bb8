//! Format command: seconds to duration strings.

use anyhow::Context;
use clap::Args;
use tracing::debug;

use giztoy_duration::{format, parse, FormatOptions, Seconds};

use super::{load_options, render_records, write_output, Record};
use crate::Cli;

/// Format seconds as duration strings.
///
/// Values may be integers, decimals or duration strings; negative numbers
/// are rendered according to --minus. Flags override values loaded with
/// --file.
#[derive(Args)]
pub struct FormatCommand {
    /// Values to format, in seconds
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Unit range, e.g. "s..d", "ms..h" or "ns"
    #[arg(long)]
    units: Option<String>,

    /// Zero components: force, minor or skip
    #[arg(long)]
    empty: Option<String>,

    /// Padding: fill, align or single
    #[arg(long)]
    zeros: Option<String>,

    /// Delimiter between components
    #[arg(long, allow_hyphen_values = true)]
    delim: Option<String>,

    /// Negative values: ignore, error, or a literal prefix
    #[arg(long, allow_hyphen_values = true)]
    minus: Option<String>,
}

impl FormatCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let base = match &cli.file {
            Some(path) => load_options(path)?,
            None => FormatOptions::default(),
        };
        let opts = self.options(base)?;
        debug!(?opts, "format options");

        let records = self.evaluate(&opts)?;
        let output = render_records(&records, cli.json)?;
        write_output(&output, cli.output.as_deref())
    }

    fn options(&self, mut opts: FormatOptions) -> anyhow::Result<FormatOptions> {
        let flags = [
            ("units", &self.units),
            ("empty", &self.empty),
            ("zeros", &self.zeros),
            ("delim", &self.delim),
            ("minus", &self.minus),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                opts.set(name, value)?;
            }
        }
        Ok(opts)
    }

    fn evaluate(&self, opts: &FormatOptions) -> anyhow::Result<Vec<Record<String>>> {
        self.values
            .iter()
            .map(|input| {
                let seconds = read_value(input)?;
                let output = format(seconds, opts)
                    .with_context(|| format!("cannot format {:?}", input))?;
                Ok(Record {
                    input: input.clone(),
                    output,
                })
            })
            .collect()
    }
}

/// Reads a signed number, falling back to the duration parser.
fn read_value(input: &str) -> anyhow::Result<Seconds> {
    if let Ok(v) = input.parse::<i64>() {
        return Ok(Seconds::Int(v));
    }
    if let Ok(v) = input.parse::<f64>() {
        return Ok(Seconds::Real(v));
    }
    parse(input).with_context(|| format!("cannot read {:?} as seconds", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;

    fn command(args: &[&str]) -> FormatCommand {
        let argv: Vec<&str> = ["duration", "format"]
            .into_iter()
            .chain(args.iter().copied())
            .collect();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Format(cmd) => cmd,
            _ => unreachable!(),
        }
    }

    fn outputs(cmd: &FormatCommand) -> Vec<String> {
        let opts = cmd.options(FormatOptions::default()).unwrap();
        cmd.evaluate(&opts)
            .unwrap()
            .into_iter()
            .map(|r| r.output)
            .collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(outputs(&command(&["1000", "1000000"])), vec!["16m40s", "11d13h46m40s"]);
    }

    #[test]
    fn test_flags() {
        let cmd = command(&["--units", "s..w", "--delim", " ", "1000000"]);
        assert_eq!(outputs(&cmd), vec!["1w 4d 13h 46m 40s"]);

        let cmd = command(&["--units", "ms..s", "--empty", "minor", "--zeros", "fill", "1"]);
        assert_eq!(outputs(&cmd), vec!["01s000ms"]);
    }

    #[test]
    fn test_negative_values() {
        let cmd = command(&["--minus", "-", "-5555"]);
        assert_eq!(outputs(&cmd), vec!["-1h32m35s"]);

        let cmd = command(&["--minus", "error", "-1"]);
        let opts = cmd.options(FormatOptions::default()).unwrap();
        assert!(cmd.evaluate(&opts).is_err());
    }

    #[test]
    fn test_duration_string_values() {
        let cmd = command(&["--units", "ns..s", "1m 10s 500ms", "1.25"]);
        assert_eq!(outputs(&cmd), vec!["70s500ms", "1s250ms"]);
    }

    #[test]
    fn test_invalid_flag_value() {
        let cmd = command(&["--zeros", "pad", "1"]);
        let err = cmd.options(FormatOptions::default()).unwrap_err();
        assert!(err.to_string().contains("zeros"));
    }
}
