//! # signet CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use signet_cli::demo::{run_demo, DemoArgs};
use signet_cli::issue::{run_issue, IssueArgs};
use signet_cli::keygen::{run_keygen, KeygenArgs};
use signet_cli::validate::{run_validate, ValidateArgs};

/// Signet licensing toolchain.
///
/// Issues Ed25519-signed license documents, validates them against a public
/// key and the clock, and generates issuer key pairs.
#[derive(Parser, Debug)]
#[command(name = "signet", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an Ed25519 issuer key pair.
    Keygen(KeygenArgs),

    /// Issue a signed license.
    Issue(IssueArgs),

    /// Validate a signed license file.
    Validate(ValidateArgs),

    /// Run the three-scenario demonstration: valid, tampered, expired.
    Demo(DemoArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args),
        Commands::Issue(args) => run_issue(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Demo(args) => run_demo(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
