//! Command-line front end for the monster numeric core.
//!
//! Run with: `cargo run -p monster-cli -- <command>`

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Exp, Matchup, Stats};
use monster_core::{ExpError, GameError, OracleError, StatError};

/// Experience, stat and type match-up calculator
#[derive(Parser)]
#[command(name = "monster-cli")]
#[command(about = "Monster numerics over a content data directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and the RON tables
    #[arg(long, global = true, env = "MONSTER_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Exp thresholds of a growth curve
    Exp(Exp),

    /// Derive a stat block for a species
    Stats(Stats),

    /// Type effectiveness of an attack
    Matchup(Matchup),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MONSTER_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(commands::default_data_dir);

    let result = match cli.command {
        Command::Exp(cmd) => cmd.execute(),
        Command::Stats(cmd) => cmd.execute(&data_dir),
        Command::Matchup(cmd) => cmd.execute(&data_dir),
    };
    if let Err(err) = &result {
        log_core_error(err);
    }
    result
}

/// Logs the classification of errors raised by the core.
fn log_core_error(err: &anyhow::Error) {
    let classified: Option<&dyn GameError> = if let Some(err) = err.downcast_ref::<StatError>() {
        Some(err)
    } else if let Some(err) = err.downcast_ref::<OracleError>() {
        Some(err)
    } else if let Some(err) = err.downcast_ref::<ExpError>() {
        Some(err)
    } else {
        None
    };
    if let Some(err) = classified {
        tracing::error!(
            code = err.error_code(),
            severity = %err.severity(),
            "command failed"
        );
    }
}
