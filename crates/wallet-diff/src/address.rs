//! Wallet addresses and output locking conditions.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::Hash256;

/// Version byte prefixed to a public-key hash before base58 encoding.
const P2PKH_PREFIX: u8 = 0x00;

/// Base58 wallet address, compared by exact string equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl From<&str> for Address {
    fn from(encoded: &str) -> Self {
        Self::new(encoded)
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(encoded))
    }
}

/// Spending predicate attached to a statically declared output.
///
/// Only the pay-to-public-key-hash kind resolves to a plain wallet address.
/// Multi-signature and script-controlled locks have no single owning wallet
/// and stay out of per-wallet accounting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LockupScript {
    /// Pay to a single public-key hash; resolvable to an address.
    #[serde(rename = "P2PKH")]
    P2pkh {
        #[serde(rename = "publicKeyHash")]
        public_key_hash: Hash256,
    },
    /// Pay to a multi-signature public-key-hash set.
    #[serde(rename = "P2MPKH")]
    P2mpkh {
        #[serde(rename = "publicKeyHashes")]
        public_key_hashes: Vec<Hash256>,
        required: u8,
    },
    /// Pay to a script hash.
    #[serde(rename = "P2SH")]
    P2sh {
        #[serde(rename = "scriptHash")]
        script_hash: Hash256,
    },
    /// Pay to a contract.
    #[serde(rename = "P2C")]
    P2c {
        #[serde(rename = "contractId")]
        contract_id: Hash256,
    },
}

impl LockupScript {
    /// Canonical address for the address-payable kind.
    ///
    /// Returns `None` for every other kind; callers skip those outputs
    /// instead of decoding them.
    #[must_use]
    pub fn p2pkh_address(&self) -> Option<Address> {
        match self {
            Self::P2pkh { public_key_hash } => Some(encode_p2pkh(public_key_hash)),
            Self::P2mpkh { .. } | Self::P2sh { .. } | Self::P2c { .. } => None,
        }
    }
}

/// Base58 encoding of the version byte plus public-key hash.
fn encode_p2pkh(public_key_hash: &Hash256) -> Address {
    let mut bytes = Vec::with_capacity(1 + Hash256::LEN);
    bytes.push(P2PKH_PREFIX);
    bytes.extend_from_slice(public_key_hash.as_bytes());

    Address::new(bs58::encode(bytes).into_string())
}
