//! Node-facing wire types and the injectable node API.
//!
//! Amounts on the node wire are string-encoded decimals and stay strings in
//! these types; the extractor normalizes them to [`crate::asset::Amount`]
//! under a strict parse. That keeps the dual upstream encodings (binary codec
//! vs. node JSON) from leaking past one boundary.

pub mod client;

pub use client::Client;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::codec::{OutputRef, TxId, UnsignedTransaction};
use crate::error::WalletDiffError;

/// Token entry as the node emits it: hex id, string-encoded amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub amount: String,
}

/// Output with a resolved address, as reported by the node.
///
/// Covers both the outputs generated by script execution and the fixed
/// outputs echoed back in historical transaction details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub address: Address,
    pub native_amount: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Unsigned section of a historical transaction detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedDetail {
    #[serde(default)]
    pub fixed_outputs: Vec<Output>,
}

/// Full historical detail of one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub unsigned: UnsignedDetail,
    #[serde(default)]
    pub generated_outputs: Vec<Output>,
}

/// Script-call parameters submitted to the transaction source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildScriptTxParams {
    pub signer_address: Address,
    pub signer_public_key: String,
    pub bytecode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_amount: Option<String>,
}

/// Transaction source response: the decoded unsigned body plus the outputs
/// produced by simulated script execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildScriptTxResult {
    pub unsigned_tx: UnsignedTransaction,
    #[serde(default)]
    pub generated_outputs: Vec<Output>,
}

/// Simulation result for the contract-flow diff: what execution generated and
/// what it consumed, both already address-resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    #[serde(default)]
    pub generated_outputs: Vec<Output>,
    #[serde(default)]
    pub contract_inputs: Vec<Output>,
}

/// History lookup and transaction source collaborators.
///
/// Kept behind a trait so the input resolver runs against an in-memory fake
/// in tests instead of a live node.
pub trait NodeApi {
    /// Identifier of the transaction that created the referenced output.
    ///
    /// # Errors
    ///
    /// [`WalletDiffError::UnresolvedInput`] when the pointer does not resolve,
    /// transport errors otherwise.
    fn creating_transaction(&self, output_ref: &OutputRef) -> Result<TxId, WalletDiffError>;

    /// Full historical detail for one transaction.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`WalletDiffError::InvalidResponse`] when the
    /// payload does not match the expected shape.
    fn transaction_detail(&self, tx_id: &TxId) -> Result<TransactionDetail, WalletDiffError>;

    /// Build (and simulate) a script-invoking transaction from call params.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`WalletDiffError::HttpStatus`] when the node
    /// rejects the call parameters.
    fn build_script_tx(
        &self,
        params: &BuildScriptTxParams,
    ) -> Result<BuildScriptTxResult, WalletDiffError>;
}
