//! Structured projection of the external transaction decoder's output.
//!
//! The binary codec itself lives outside this crate. These are the decoded
//! shapes it hands over: amounts already widened to [`Amount`], token ids and
//! hashes already byte-typed. Serde here is the JSON projection of that
//! decoder output, amounts carried as decimal strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::LockupScript;
use crate::asset::{Amount, TokenId, amount_serde};
use crate::error::WalletDiffError;

/// 32-byte hash, canonically lowercase hex on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const LEN: usize = 32;

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a hex-encoded hash, accepting either case.
    pub fn from_hex(raw: &str) -> Result<Self, WalletDiffError> {
        let bytes = hex::decode(raw)?;
        let bytes: [u8; Self::LEN] = bytes.try_into().map_err(|_| {
            WalletDiffError::InvalidResponse(format!(
                "hash must be {} bytes, got '{raw}'",
                Self::LEN
            ))
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl Serialize for Hash256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Transaction identifier.
pub type TxId = Hash256;

/// Indirect reference to a previously created output.
///
/// Carries no asset data; the creating transaction must be recovered through
/// the history lookup service before the referenced value is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRef {
    pub hint: u32,
    pub key: Hash256,
}

/// One declared input of a decoded transaction body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInput {
    pub output_ref: OutputRef,
}

/// Token entry with a binary-decoded amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    #[serde(with = "amount_serde")]
    pub amount: Amount,
}

/// Statically declared output, carrying a locking condition instead of a
/// resolved address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOutput {
    #[serde(with = "amount_serde")]
    pub amount: Amount,
    pub lockup_script: LockupScript,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Decoded unsigned transaction body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    pub inputs: Vec<TxInput>,
    pub fixed_outputs: Vec<AssetOutput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_transaction_round_trips_through_json() {
        let tx = UnsignedTransaction {
            inputs: vec![TxInput {
                output_ref: OutputRef {
                    hint: 42,
                    key: Hash256::from_bytes([1; 32]),
                },
            }],
            fixed_outputs: vec![AssetOutput {
                amount: Amount::from(u128::MAX),
                lockup_script: LockupScript::P2pkh {
                    public_key_hash: Hash256::from_bytes([2; 32]),
                },
                tokens: vec![Token {
                    id: TokenId::from_bytes([3; 32]),
                    amount: Amount::from(7u8),
                }],
            }],
        };

        let json = serde_json::to_value(&tx).expect("serialize");
        assert_eq!(json["inputs"][0]["outputRef"]["hint"], 42);
        assert_eq!(
            json["fixedOutputs"][0]["amount"],
            u128::MAX.to_string()
        );

        let back: UnsignedTransaction = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, tx);
    }

    #[test]
    fn hash_hex_is_case_insensitive() {
        let upper = Hash256::from_hex(&"0F".repeat(32)).expect("hex");
        let lower = Hash256::from_hex(&"0f".repeat(32)).expect("hex");

        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "0f".repeat(32));
    }
}
