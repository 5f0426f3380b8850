use anyhow::{Context, Result};

use clap::Args;

use wallet_diff::node::{BuildScriptTxParams, Client, NodeApi};
use wallet_diff::{Address, DiffRuntime};

/// Build a script-invoking transaction on the node and print the signer's
/// asset diff before anything is signed or broadcast.
#[derive(Args, Debug)]
pub struct Script {
    /// Signer wallet address
    #[arg(long)]
    pub address: Address,
    /// Signer public key (hex)
    #[arg(long = "public-key")]
    pub public_key: String,
    /// Compiled script bytecode (hex)
    #[arg(long)]
    pub bytecode: String,
    /// Native amount to attach, in base units
    #[arg(long = "native-amount")]
    pub native_amount: Option<String>,
    /// Node REST base URL
    #[arg(long = "node-url", env = "NODE_URL")]
    pub node_url: String,
}

impl Script {
    pub fn handle(self) -> Result<()> {
        let client = Client::new(&self.node_url);

        let build = client
            .build_script_tx(&BuildScriptTxParams {
                signer_address: self.address.clone(),
                signer_public_key: self.public_key,
                bytecode: self.bytecode,
                native_amount: self.native_amount,
            })
            .context("building script transaction")?;

        let runtime = DiffRuntime::new(client);
        let diff = runtime
            .script_tx_diff(&build.unsigned_tx, &build.generated_outputs, &self.address)
            .context("computing asset diff")?;

        println!("Asset diff for {}:", self.address);
        println!("{diff}");

        Ok(())
    }
}
