use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use clap::Args;

use serde::Deserialize;

use wallet_diff::node::{self, Client, SimulationResult};
use wallet_diff::{Address, DiffRuntime, UnsignedTransaction, simulation_diff};

/// Decoded transaction file: the external decoder's JSON projection of the
/// unsigned body, plus the outputs generated by execution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecodedTxFile {
    unsigned_tx: UnsignedTransaction,
    #[serde(default)]
    generated_outputs: Vec<node::Output>,
}

/// Compute the diff for a wallet from a decoded transaction JSON file.
///
/// Input resolution still needs the node: consumed amounts only exist in
/// transaction history.
#[derive(Args, Debug)]
pub struct Tx {
    /// Path to the decoded transaction JSON
    #[arg(long)]
    pub file: PathBuf,
    /// Target wallet address
    #[arg(long)]
    pub address: Address,
    /// Node REST base URL
    #[arg(long = "node-url", env = "NODE_URL")]
    pub node_url: String,
}

impl Tx {
    pub fn handle(self) -> Result<()> {
        let raw = fs::read_to_string(&self.file)
            .with_context(|| format!("reading {}", self.file.display()))?;
        let decoded: DecodedTxFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.file.display()))?;

        let runtime = DiffRuntime::new(Client::new(&self.node_url));
        let diff = runtime
            .script_tx_diff(
                &decoded.unsigned_tx,
                &decoded.generated_outputs,
                &self.address,
            )
            .context("computing asset diff")?;

        println!("Asset diff for {}:", self.address);
        println!("{diff}");

        Ok(())
    }
}

/// Compute the signer's outflow diff from a simulation result JSON file.
#[derive(Args, Debug)]
pub struct Simulation {
    /// Path to the simulation result JSON
    #[arg(long)]
    pub file: PathBuf,
    /// Signer wallet address
    #[arg(long)]
    pub address: Address,
}

impl Simulation {
    pub fn handle(self) -> Result<()> {
        let raw = fs::read_to_string(&self.file)
            .with_context(|| format!("reading {}", self.file.display()))?;
        let simulation: SimulationResult = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.file.display()))?;

        let diff = simulation_diff(&simulation, &self.address)
            .context("computing simulation diff")?;

        println!("Outflow diff for {}:", self.address);
        println!("{diff}");

        Ok(())
    }
}
