//! Shared helpers for the duration commands.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;

use giztoy_duration::FormatOptions;

/// One converted input.
#[derive(Debug, Serialize)]
pub struct Record<T> {
    pub input: String,
    pub output: T,
}

/// Loads format options from a YAML or JSON file.
///
/// The extension picks the format; unknown extensions try YAML, then JSON.
pub fn load_options(path: impl AsRef<Path>) -> anyhow::Result<FormatOptions> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(&data)?),
        Some("json") => Ok(serde_json::from_slice(&data)?),
        _ => {
            if let Ok(v) = serde_yaml::from_slice(&data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(&data) {
                return Ok(v);
            }
            bail!("failed to parse {} (tried YAML and JSON)", path.display())
        }
    }
}

/// Renders records as plain lines or a JSON array.
pub fn render_records<T: Serialize + ToString>(records: &[Record<T>], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    let lines: Vec<String> = records.iter().map(|r| r.output.to_string()).collect();
    Ok(lines.join("\n"))
}

/// Writes rendered output to a file, or stdout when no file is given.
pub fn write_output(output: &str, file: Option<&str>) -> anyhow::Result<()> {
    match file {
        Some(path) => {
            let mut file = File::create(path).with_context(|| format!("failed to create {}", path))?;
            writeln!(file, "{}", output)?;
        }
        None => println!("{}", output),
    }
    Ok(())
}
