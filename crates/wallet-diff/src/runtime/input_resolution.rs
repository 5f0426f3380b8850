//! Input resolution through transaction history.
//!
//! A transaction declares what it consumes only as pointers to previously
//! created outputs; the pointers carry no owner and no amounts. The value
//! consumed from the target wallet is recovered by tracing each pointer back
//! to its creating transaction and scanning the outputs that transaction made
//! to the target, both statically declared and generated at execution time.

use crate::address::Address;
use crate::asset::AssetRecord;
use crate::codec::OutputRef;
use crate::error::WalletDiffError;
use crate::node::NodeApi;
use crate::runtime::output_resolution::record_from_wire_output;

/// Resolve every pointer and accumulate the target's consumed assets.
///
/// Returns a zero record when no referenced output pays `target`. Any failed
/// lookup aborts the resolution: treating an unresolved pointer as zero would
/// understate the amounts consumed and falsify the diff.
pub fn resolve_inputs<N: NodeApi>(
    node: &N,
    output_refs: &[OutputRef],
    target: &Address,
) -> Result<AssetRecord, WalletDiffError> {
    let mut consumed = AssetRecord::empty(target.clone());

    for output_ref in output_refs {
        let tx_id = node.creating_transaction(output_ref)?;
        let detail = node.transaction_detail(&tx_id)?;
        tracing::debug!(
            "input {}:{} created by transaction {tx_id}",
            output_ref.hint,
            output_ref.key
        );

        for output in detail
            .unsigned
            .fixed_outputs
            .iter()
            .chain(&detail.generated_outputs)
        {
            if output.address == *target {
                consumed.merge(&record_from_wire_output(output)?);
            }
        }
    }

    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Amount, TokenId};
    use crate::codec::Hash256;
    use crate::node::{TransactionDetail, UnsignedDetail};
    use crate::test_support::{FakeNode, output_ref, wire_output};

    #[test]
    fn consumed_assets_accumulate_across_pointers_and_output_kinds() {
        let target = Address::new("wallet");
        let mut node = FakeNode::default();

        let tx_a = Hash256::from_bytes([0xaa; 32]);
        node.insert(
            output_ref(1, 1),
            tx_a,
            TransactionDetail {
                unsigned: UnsignedDetail {
                    fixed_outputs: vec![
                        wire_output("wallet", "40", &[(1, 2)]),
                        wire_output("other", "99", &[]),
                    ],
                },
                generated_outputs: vec![wire_output("wallet", "10", &[(2, 3)])],
            },
        );

        let tx_b = Hash256::from_bytes([0xbb; 32]);
        node.insert(
            output_ref(2, 2),
            tx_b,
            TransactionDetail {
                unsigned: UnsignedDetail {
                    fixed_outputs: vec![wire_output("wallet", "5", &[(1, 1)])],
                },
                generated_outputs: Vec::new(),
            },
        );

        let consumed =
            resolve_inputs(&node, &[output_ref(1, 1), output_ref(2, 2)], &target).expect("resolve");

        assert_eq!(consumed.owner, target);
        assert_eq!(consumed.native, Amount::from(55u8));
        assert_eq!(
            consumed.tokens[&TokenId::from_bytes([1; 32])],
            Amount::from(3u8)
        );
        assert_eq!(
            consumed.tokens[&TokenId::from_bytes([2; 32])],
            Amount::from(3u8)
        );
    }

    #[test]
    fn no_matching_outputs_yield_a_zero_record() {
        let target = Address::new("wallet");
        let mut node = FakeNode::default();
        node.insert(
            output_ref(1, 1),
            Hash256::from_bytes([0xaa; 32]),
            TransactionDetail {
                unsigned: UnsignedDetail {
                    fixed_outputs: vec![wire_output("other", "7", &[])],
                },
                generated_outputs: Vec::new(),
            },
        );

        let consumed = resolve_inputs(&node, &[output_ref(1, 1)], &target).expect("resolve");
        assert!(consumed.is_empty());
    }

    #[test]
    fn unresolved_pointer_aborts_the_whole_resolution() {
        let target = Address::new("wallet");
        let mut node = FakeNode::default();
        node.insert(
            output_ref(1, 1),
            Hash256::from_bytes([0xaa; 32]),
            TransactionDetail {
                unsigned: UnsignedDetail {
                    fixed_outputs: vec![wire_output("wallet", "40", &[])],
                },
                generated_outputs: Vec::new(),
            },
        );

        let err = resolve_inputs(&node, &[output_ref(1, 1), output_ref(9, 9)], &target)
            .expect_err("unresolved pointer");

        assert!(matches!(
            err,
            WalletDiffError::UnresolvedInput { hint: 9, .. }
        ));
    }

    #[test]
    fn malformed_historical_amount_propagates() {
        let target = Address::new("wallet");
        let mut node = FakeNode::default();
        node.insert(
            output_ref(1, 1),
            Hash256::from_bytes([0xaa; 32]),
            TransactionDetail {
                unsigned: UnsignedDetail {
                    fixed_outputs: vec![wire_output("wallet", "not-a-number", &[])],
                },
                generated_outputs: Vec::new(),
            },
        );

        let err = resolve_inputs(&node, &[output_ref(1, 1)], &target).expect_err("malformed");
        assert!(matches!(err, WalletDiffError::MalformedAmount { .. }));
    }
}
