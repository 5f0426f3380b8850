//! End-to-end diff pipelines over a node API.
//!
//! The wallet path ([`DiffRuntime::script_tx_diff`]) reconstructs both sides
//! for one target address: the output side from the transaction's fixed and
//! generated outputs, the input side by resolving every declared pointer
//! through history. The simulation path ([`simulation_diff`]) works on an
//! execution result alone, where both sides arrive address-resolved.
//!
//! Either path returns a complete [`AssetDiff`] or the first error; there is
//! no partial result.

mod input_resolution;
mod output_resolution;

pub use input_resolution::resolve_inputs;
pub use output_resolution::extract_outputs;

use crate::address::Address;
use crate::asset::{AssetRecord, aggregate};
use crate::codec::{OutputRef, UnsignedTransaction};
use crate::diff::AssetDiff;
use crate::error::WalletDiffError;
use crate::node::{self, NodeApi, SimulationResult};
use crate::runtime::output_resolution::record_from_wire_output;

/// Diff pipelines bound to one node API implementation.
#[derive(Debug)]
pub struct DiffRuntime<N> {
    node: N,
}

impl<N: NodeApi> DiffRuntime<N> {
    pub const fn new(node: N) -> Self {
        Self { node }
    }

    pub const fn node(&self) -> &N {
        &self.node
    }

    /// Net balance change for `target` caused by a script-invoking transaction.
    ///
    /// Output side: fixed outputs of the decoded body plus generated outputs,
    /// filtered to `target` and aggregated. Input side: every declared pointer
    /// resolved through history.
    ///
    /// # Errors
    ///
    /// Any lookup or parse failure aborts the run; see
    /// [`WalletDiffError::UnresolvedInput`] and
    /// [`WalletDiffError::MalformedAmount`].
    pub fn script_tx_diff(
        &self,
        unsigned_tx: &UnsignedTransaction,
        generated_outputs: &[node::Output],
        target: &Address,
    ) -> Result<AssetDiff, WalletDiffError> {
        let output_records =
            extract_outputs(&unsigned_tx.fixed_outputs, generated_outputs, target)?;
        let outputs = fold_records(target, output_records);

        let output_refs: Vec<OutputRef> = unsigned_tx
            .inputs
            .iter()
            .map(|input| input.output_ref)
            .collect();
        let inputs = resolve_inputs(&self.node, &output_refs, target)?;

        tracing::debug!(
            "target {target}: output native {}, input native {}",
            outputs.native,
            inputs.native
        );

        Ok(AssetDiff::between(&outputs, &inputs))
    }
}

/// Net outflow for `signer` implied by a simulated script execution.
///
/// Generated outputs addressed back to the signer are its own change and are
/// filtered out before totalling; what remains, the value delivered elsewhere,
/// minus the contract-consumed inputs is the signer's net outflow. Positive
/// deltas flow out of the wallet, negative flow in.
///
/// # Errors
///
/// Malformed wire amounts abort the computation.
pub fn simulation_diff(
    simulation: &SimulationResult,
    signer: &Address,
) -> Result<AssetDiff, WalletDiffError> {
    let generated: Vec<AssetRecord> = simulation
        .generated_outputs
        .iter()
        .filter(|output| output.address != *signer)
        .map(record_from_wire_output)
        .collect::<Result<_, _>>()?;
    // One total per distinct address first; script runs routinely emit
    // several outputs to the same address.
    let outputs = fold_records(signer, aggregate(generated));

    let mut inputs = AssetRecord::empty(signer.clone());
    for input in &simulation.contract_inputs {
        inputs.merge(&record_from_wire_output(input)?);
    }

    Ok(AssetDiff::between(&outputs, &inputs))
}

/// Collapse extracted records into a single total owned by `owner`.
fn fold_records(owner: &Address, records: Vec<AssetRecord>) -> AssetRecord {
    let mut total = AssetRecord::empty(owner.clone());
    for record in records {
        total.merge(&record);
    }

    total
}
