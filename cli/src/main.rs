use std::path::PathBuf;

use argscan_core::{ArgScanner, FlagTable};
use clap::Parser;
use tracing::debug;

mod config;
mod error;
mod logging;

use error::CliError;

/// Format used to print the parsed arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argscan")]
#[command(about = "Scan command-line tokens against a flag table")]
#[command(version)]
struct Cli {
    /// Flag table file (YAML for .yml/.yaml, JSON otherwise).
    #[arg(long)]
    flags: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Tokens to scan, given after `--`.
    #[arg(last = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let table = match &cli.flags {
        Some(path) => config::load_flag_table(path)?,
        None => FlagTable::new(),
    };
    debug!(
        flags = table.flags.len(),
        tokens = cli.tokens.len(),
        "Scanning tokens"
    );

    let mut scanner = ArgScanner::from_tokens(&cli.tokens);
    let parsed = table.parse(&mut scanner)?;

    let raw = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&parsed)?,
        OutputFormat::Yaml => serde_yaml::to_string(&parsed)?,
    };
    println!("{}", raw.trim_end());
    Ok(())
}
