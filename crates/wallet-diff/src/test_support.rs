//! In-memory node fake and fixture builders shared across unit tests.

use std::collections::HashMap;

use crate::codec::{Hash256, OutputRef, TxId};
use crate::error::WalletDiffError;
use crate::node::{
    BuildScriptTxParams, BuildScriptTxResult, NodeApi, Output, Token, TransactionDetail,
};

/// In-memory history: pointer -> creating tx id -> detail.
#[derive(Debug, Default)]
pub struct FakeNode {
    creating: HashMap<OutputRef, TxId>,
    details: HashMap<TxId, TransactionDetail>,
}

impl FakeNode {
    /// Register one resolvable pointer with its creating transaction.
    pub fn insert(&mut self, output_ref: OutputRef, tx_id: TxId, detail: TransactionDetail) {
        self.creating.insert(output_ref, tx_id);
        self.details.insert(tx_id, detail);
    }
}

impl NodeApi for FakeNode {
    fn creating_transaction(&self, output_ref: &OutputRef) -> Result<TxId, WalletDiffError> {
        self.creating.get(output_ref).copied().ok_or_else(|| {
            WalletDiffError::UnresolvedInput {
                hint: output_ref.hint,
                key: output_ref.key,
                message: "not found".to_string(),
            }
        })
    }

    fn transaction_detail(&self, tx_id: &TxId) -> Result<TransactionDetail, WalletDiffError> {
        self.details.get(tx_id).cloned().ok_or_else(|| {
            WalletDiffError::InvalidResponse(format!("unknown transaction {tx_id}"))
        })
    }

    fn build_script_tx(
        &self,
        _params: &BuildScriptTxParams,
    ) -> Result<BuildScriptTxResult, WalletDiffError> {
        Err(WalletDiffError::InvalidResponse(
            "fake node cannot build transactions".to_string(),
        ))
    }
}

/// Pointer fixture with distinct hint and key tags.
#[must_use]
pub fn output_ref(hint: u32, key_tag: u8) -> OutputRef {
    OutputRef {
        hint,
        key: Hash256::from_bytes([key_tag; 32]),
    }
}

/// Node-wire output fixture with string-encoded amounts.
#[must_use]
pub fn wire_output(address: &str, native_amount: &str, tokens: &[(u8, u64)]) -> Output {
    Output {
        address: address.into(),
        native_amount: native_amount.to_string(),
        tokens: tokens
            .iter()
            .map(|(tag, amount)| Token {
                id: hex::encode([*tag; 32]),
                amount: amount.to_string(),
            })
            .collect(),
    }
}
