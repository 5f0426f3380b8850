//! Output extraction for per-wallet accounting.
//!
//! Two sources feed the output side:
//! - fixed outputs declared in the decoded transaction body, carrying locking
//!   conditions that must be decoded to an address;
//! - generated outputs produced by script execution, already address-resolved
//!   with string-encoded amounts.
//!
//! Only pay-to-public-key-hash locking conditions take part. Script-controlled
//! and multi-signature locks do not resolve to a single wallet and are skipped
//! entirely, never counted as zero-value.

use crate::address::Address;
use crate::asset::{AssetRecord, TokenId, parse_amount};
use crate::codec::AssetOutput;
use crate::error::WalletDiffError;
use crate::node;

/// Convert one node-wire output into an asset record.
///
/// String-encoded amounts are parsed strictly; a malformed value fails the
/// whole conversion.
pub(crate) fn record_from_wire_output(
    output: &node::Output,
) -> Result<AssetRecord, WalletDiffError> {
    let mut record = AssetRecord::empty(output.address.clone());
    record.native = parse_amount("nativeAmount", &output.native_amount)?;
    for token in &output.tokens {
        record.add_token(
            TokenId::from_hex(&token.id)?,
            parse_amount("tokens.amount", &token.amount)?,
        );
    }

    Ok(record)
}

/// Convert one fixed output's binary-typed amounts into an asset record.
fn record_from_fixed_output(owner: Address, output: &AssetOutput) -> AssetRecord {
    let mut record = AssetRecord::empty(owner);
    record.native = output.amount.clone();
    for token in &output.tokens {
        record.add_token(token.id, token.amount.clone());
    }

    record
}

/// Filter and decode both output sets down to the records payable to `target`.
///
/// The result keeps encounter order, fixed outputs first, then generated
/// outputs, ready for aggregation.
pub fn extract_outputs(
    fixed_outputs: &[AssetOutput],
    generated_outputs: &[node::Output],
    target: &Address,
) -> Result<Vec<AssetRecord>, WalletDiffError> {
    let mut records = Vec::new();

    for output in fixed_outputs {
        let Some(address) = output.lockup_script.p2pkh_address() else {
            continue;
        };
        if address == *target {
            records.push(record_from_fixed_output(address, output));
        }
    }

    for output in generated_outputs {
        if output.address == *target {
            records.push(record_from_wire_output(output)?);
        }
    }

    Ok(records)
}
