//! bcdiff CLI - backward-compatibility checks for public class-like APIs
//!
//! Compares two API snapshots of a codebase and reports which changes break
//! consumers of the public API.

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod baseline;
mod commands;
mod config;
mod constants;
mod output;

use baseline::Baseline;
use commands::compare::CompareArgs;
use config::BcdiffConfig;
use constants::EXIT_BC_BREAKS;
use output::{OutputConfig, OutputFormat};

/// Detect backwards-incompatible changes between two versions of an API.
#[derive(Parser)]
#[command(name = "bcdiff")]
#[command(author, version)]
#[command(about = "Detect backwards-incompatible changes between two versions of an API")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  bcdiff compare --past v1.json --new v2.json
  bcdiff compare --past v1.json --new v2.json --format github
  bcdiff symbols v1.json

Exit codes:
  0  no backwards-incompatible changes
  1  error
  3  backwards-incompatible changes detected")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file (defaults to ./.bcdiff.toml)
    #[arg(long, global = true, env = "BCDIFF_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two API snapshots and report BC breaks
    Compare {
        /// Snapshot of the old version
        #[arg(long)]
        past: PathBuf,

        /// Snapshot of the new version
        #[arg(long)]
        new: PathBuf,

        /// Snapshot listing the API to check (defaults to --past)
        #[arg(long)]
        defined: Option<PathBuf>,

        /// Regex of rendered changes to ignore (repeatable)
        #[arg(long = "baseline", value_name = "REGEX")]
        baseline: Vec<String>,

        /// Compare symbols on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// List the public API symbols of a snapshot
    Symbols {
        /// Snapshot file
        snapshot: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => BcdiffConfig::load_file(path)?,
        None => BcdiffConfig::load(std::path::Path::new(".")),
    };

    // Resolve output format: CLI flag > config default > Text
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }
    let output_config = OutputConfig::auto_detect(format, config.use_color());

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Compare {
            past,
            new,
            defined,
            baseline,
            parallel,
        } => {
            let baseline = Baseline::from_patterns(
                config
                    .baseline_patterns()
                    .iter()
                    .chain(baseline.iter()),
            )
            .context("Invalid baseline")?;

            let args = CompareArgs {
                past,
                new,
                defined,
                parallel: parallel || config.parallel(),
            };

            let breaks = commands::compare::run(&args, &baseline, output_config)?;
            if breaks > 0 {
                std::process::exit(EXIT_BC_BREAKS);
            }
            Ok(())
        }
        Commands::Symbols { snapshot } => commands::symbols::run(&snapshot, output_config),
    }
}
