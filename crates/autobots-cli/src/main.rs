//! # autobots CLI entry point
//!
//! Parses command-line arguments, installs tracing, loads configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autobots_cli::config::load_config;
use autobots_cli::validate::{run_validate, ValidateArgs};
use autobots_cli::{EXIT_INVALID, EXIT_OK, EXIT_USAGE};
use autobots_core::{SCHEMA_API_VERSION, SCHEMA_REVISION};

/// autobots: agents that know the rules of software.
///
/// Validates consumer/provider contracts: HTTP surface, behavioral
/// assertions, and the test bindings that exercise them.
#[derive(Parser, Debug)]
#[command(name = "autobots", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./autobots.yaml, then ~/.autobots.yaml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate contract documents and report every finding.
    Validate(ValidateArgs),

    /// Show version information.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("autobots CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Version => {
            println!("autobots {}", env!("CARGO_PKG_VERSION"));
            println!("schema: {SCHEMA_API_VERSION} ({SCHEMA_REVISION})");
            ExitCode::from(EXIT_OK)
        }
        Commands::Validate(args) => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let home = std::env::var_os("HOME").map(PathBuf::from);
            let config = match load_config(cli.config.as_deref(), &cwd, home.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("{e:#}");
                    return ExitCode::from(EXIT_USAGE);
                }
            };
            match run_validate(&args, &config) {
                Ok(code) => ExitCode::from(code),
                Err(e) => {
                    tracing::error!("{e:#}");
                    ExitCode::from(EXIT_INVALID)
                }
            }
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
