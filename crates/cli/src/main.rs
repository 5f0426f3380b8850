#![warn(clippy::all, clippy::pedantic)]

mod commands;

use commands::offline::{Simulation, Tx};
use commands::script::Script;

use anyhow::Result;

use clap::{Parser, Subcommand};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command-line entrypoint for the wallet asset-diff tool.
#[derive(Parser, Debug)]
#[command(
    name = "wallet-diff-cli",
    version,
    about = "Per-wallet asset diff for script-invoking transactions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a script call via the node and print the signer's asset diff
    Script(Script),
    /// Compute the diff from a decoded transaction JSON file
    Tx(Tx),
    /// Compute the outflow diff from a simulation result JSON file
    Simulation(Simulation),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    logging_init();

    let parsed = Cli::parse();

    match parsed.command {
        Commands::Script(script) => script.handle(),
        Commands::Tx(tx) => tx.handle(),
        Commands::Simulation(simulation) => simulation.handle(),
    }
}

fn logging_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
