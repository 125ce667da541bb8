//! Parse command: duration strings to seconds.

use anyhow::Context;
use clap::Args;
use tracing::debug;

use giztoy_duration::{parse, Seconds};

use super::{render_records, write_output, Record};
use crate::Cli;

/// Parse duration strings into seconds.
///
/// Accepts integer literals ("12"), decimal literals ("0.4") and compound
/// strings ("1m 10s 500ms").
#[derive(Args)]
pub struct ParseCommand {
    /// Duration strings to parse
    #[arg(required = true)]
    inputs: Vec<String>,
}

impl ParseCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let records = self.evaluate()?;
        let output = render_records(&records, cli.json)?;
        write_output(&output, cli.output.as_deref())
    }

    fn evaluate(&self) -> anyhow::Result<Vec<Record<Seconds>>> {
        self.inputs
            .iter()
            .map(|input| {
                let output = parse(input).with_context(|| format!("cannot parse {:?}", input))?;
                debug!(input = %input, %output, "parsed");
                Ok(Record {
                    input: input.clone(),
                    output,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(inputs: &[&str]) -> ParseCommand {
        ParseCommand {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_evaluate() {
        let records = command(&["1m 10s", "1m 10s 500ms", "12"]).evaluate().unwrap();
        let outputs: Vec<Seconds> = records.iter().map(|r| r.output).collect();
        assert_eq!(outputs, vec![Seconds::Int(70), Seconds::Real(70.5), Seconds::Int(12)]);
    }

    #[test]
    fn test_evaluate_stops_on_error() {
        let err = command(&["1m", "later"]).evaluate().unwrap_err();
        assert!(err.to_string().contains("later"));
    }

    #[test]
    fn test_json_keeps_numbers() {
        let records = command(&["90s", "250ms"]).evaluate().unwrap();
        let json = render_records(&records, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["output"], 90);
        assert_eq!(value[1]["output"], 0.25);
    }
}
