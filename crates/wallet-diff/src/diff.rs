//! Signed net-change computation between aggregated asset records.

use std::fmt;

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::asset::{AssetRecord, TokenId};

/// Exact signed amount in base units.
pub type SignedAmount = BigInt;

/// Net per-asset change for one wallet address.
///
/// Sign convention is outflow-positive: a positive delta means the address
/// sent more of the asset than it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDiff {
    pub native_delta: SignedAmount,
    pub token_deltas: IndexMap<TokenId, SignedAmount>,
}

impl AssetDiff {
    /// Subtract aggregated input assets from aggregated output assets.
    ///
    /// Token deltas cover the union of ids on both sides; an id missing from
    /// one side counts as zero there. Zero deltas are kept, not elided, so a
    /// token seen anywhere always shows up in the result.
    ///
    /// Pure: neither record is mutated.
    #[must_use]
    pub fn between(outputs: &AssetRecord, inputs: &AssetRecord) -> Self {
        let native_delta =
            SignedAmount::from(outputs.native.clone()) - SignedAmount::from(inputs.native.clone());

        let mut token_deltas: IndexMap<TokenId, SignedAmount> = IndexMap::new();
        for (id, amount) in &outputs.tokens {
            token_deltas.insert(*id, SignedAmount::from(amount.clone()));
        }
        for (id, amount) in &inputs.tokens {
            let delta = token_deltas.entry(*id).or_insert_with(SignedAmount::zero);
            *delta -= SignedAmount::from(amount.clone());
        }

        Self {
            native_delta,
            token_deltas,
        }
    }

    /// True when every delta, native and per-token, is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.native_delta.is_zero() && self.token_deltas.values().all(Zero::is_zero)
    }
}

impl fmt::Display for AssetDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native: {}", self.native_delta)?;
        for (id, delta) in &self.token_deltas {
            write!(f, "\n{id}: {delta}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::asset::Amount;

    fn test_token(tag: u8) -> TokenId {
        TokenId::from_bytes([tag; 32])
    }

    fn record(native: u64, tokens: &[(u8, u64)]) -> AssetRecord {
        AssetRecord::new(
            Address::new("wallet"),
            Amount::from(native),
            tokens
                .iter()
                .map(|(tag, amount)| (test_token(*tag), Amount::from(*amount))),
        )
    }

    #[test]
    fn diff_subtracts_inputs_from_outputs_over_token_union() {
        let outputs = record(100, &[(1, 5)]);
        let inputs = record(40, &[(1, 2), (2, 3)]);

        let diff = AssetDiff::between(&outputs, &inputs);

        assert_eq!(diff.native_delta, SignedAmount::from(60));
        assert_eq!(diff.token_deltas[&test_token(1)], SignedAmount::from(3));
        assert_eq!(diff.token_deltas[&test_token(2)], SignedAmount::from(-3));
        assert_eq!(diff.token_deltas.len(), 2);
    }

    #[test]
    fn diff_is_antisymmetric() {
        let outputs = record(77, &[(1, 4), (3, 9)]);
        let inputs = record(100, &[(1, 6), (2, 2)]);

        let forward = AssetDiff::between(&outputs, &inputs);
        let backward = AssetDiff::between(&inputs, &outputs);

        assert_eq!(forward.native_delta, -backward.native_delta.clone());
        for (id, delta) in &forward.token_deltas {
            assert_eq!(*delta, -backward.token_deltas[id].clone());
        }
        assert_eq!(forward.token_deltas.len(), backward.token_deltas.len());
    }

    #[test]
    fn structurally_equal_sides_diff_to_zero() {
        let outputs = record(55, &[(1, 2), (2, 8)]);
        let inputs = record(55, &[(1, 2), (2, 8)]);

        let diff = AssetDiff::between(&outputs, &inputs);

        assert!(diff.is_zero());
        // Zero rows are reported, not elided.
        assert_eq!(diff.token_deltas.len(), 2);
    }

    #[test]
    fn one_sided_token_is_never_dropped() {
        let outputs = record(0, &[]);
        let inputs = record(0, &[(9, 1234)]);

        let diff = AssetDiff::between(&outputs, &inputs);

        assert_eq!(diff.token_deltas[&test_token(9)], SignedAmount::from(-1234));
    }

    #[test]
    fn deltas_stay_exact_beyond_u64() {
        let big = Amount::from(u64::MAX) * 3u8;
        let outputs = AssetRecord::new(Address::new("wallet"), big.clone(), []);
        let inputs = AssetRecord::new(Address::new("wallet"), Amount::from(1u8), []);

        let diff = AssetDiff::between(&outputs, &inputs);

        assert_eq!(
            diff.native_delta,
            SignedAmount::from(big) - SignedAmount::from(1)
        );
    }
}
