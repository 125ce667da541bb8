//! Duration CLI - parse and format human-readable duration strings.

use clap::{Parser, Subcommand};

mod commands;

use commands::{FormatCommand, ParseCommand};

/// Duration CLI - convert between duration strings and seconds.
///
/// Examples:
///   duration parse "1m 10s 500ms"        # 70.5
///   duration format 1000000 --units s..w  # 1w4d13h46m40s
///   duration format -5555 --minus -       # -1h32m35s
#[derive(Parser)]
#[command(name = "duration")]
#[command(about = "Duration string conversion tool")]
#[command(version)]
pub struct Cli {
    /// Format options file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse duration strings into seconds
    Parse(ParseCommand),
    /// Format seconds as duration strings
    Format(FormatCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Parse(cmd) => cmd.run(&cli),
        Commands::Format(cmd) => cmd.run(&cli),
    }
}
