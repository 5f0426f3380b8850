//! Asset records and the reconciliation primitives over them.
//!
//! Everything downstream (input resolution, output extraction, the diff
//! engine) funnels per-output value into [`AssetRecord`] and combines records
//! with [`AssetRecord::merge`]. Merging is commutative and associative, so
//! accumulation order never affects the totals.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::WalletDiffError;

/// Exact unsigned amount in base units.
///
/// Native amounts routinely exceed `2^63`, so arithmetic stays in unbounded
/// integers end to end. Amounts never pass through floating point.
pub type Amount = BigUint;

/// Fungible-token identifier. Canonical form is lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId([u8; 32]);

impl TokenId {
    pub const LEN: usize = 32;

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a hex-encoded token id, accepting either case.
    pub fn from_hex(raw: &str) -> Result<Self, WalletDiffError> {
        let bytes = hex::decode(raw)?;
        let bytes: [u8; Self::LEN] = bytes.try_into().map_err(|_| {
            WalletDiffError::InvalidResponse(format!(
                "token id must be {} bytes, got '{raw}'",
                Self::LEN
            ))
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({self})")
    }
}

impl Serialize for TokenId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Strict base-10 parse of a wire amount.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no exponent. A
/// value that does not parse is a fatal [`WalletDiffError::MalformedAmount`],
/// never coerced to zero.
pub fn parse_amount(field: &str, value: &str) -> Result<Amount, WalletDiffError> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(WalletDiffError::MalformedAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    value
        .parse::<BigUint>()
        .map_err(|_| WalletDiffError::MalformedAmount {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Serde projection of [`Amount`] fields as decimal strings.
pub mod amount_serde {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Non-negative bundle of value attributable to one address.
///
/// Token entries keep first-seen insertion order; equality ignores order, so
/// records merged in different sequences still compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRecord {
    pub owner: Address,
    pub native: Amount,
    pub tokens: IndexMap<TokenId, Amount>,
}

impl AssetRecord {
    /// Zero-valued record for `owner`.
    #[must_use]
    pub fn empty(owner: Address) -> Self {
        Self {
            owner,
            native: Amount::zero(),
            tokens: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn new(
        owner: Address,
        native: Amount,
        tokens: impl IntoIterator<Item = (TokenId, Amount)>,
    ) -> Self {
        let mut record = Self::empty(owner);
        record.native = native;
        for (id, amount) in tokens {
            record.add_token(id, amount);
        }

        record
    }

    /// Add one token amount, summing with any existing entry for the id.
    pub fn add_token(&mut self, id: TokenId, amount: Amount) {
        match self.tokens.entry(id) {
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            Entry::Vacant(entry) => {
                entry.insert(amount);
            }
        }
    }

    /// Fold another record's amounts into this one.
    pub fn merge(&mut self, addition: &AssetRecord) {
        self.native += &addition.native;
        for (id, amount) in &addition.tokens {
            match self.tokens.entry(*id) {
                Entry::Occupied(mut entry) => *entry.get_mut() += amount,
                Entry::Vacant(entry) => {
                    entry.insert(amount.clone());
                }
            }
        }
    }

    /// True when the record carries no value at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.native.is_zero() && self.tokens.values().all(Zero::is_zero)
    }
}

/// Collapse records into at most one record per distinct owner.
///
/// Records sharing an owner are merged via [`AssetRecord::merge`]; owners keep
/// first-seen order. A single transaction routinely produces several outputs
/// to the same address (a payment plus its change), which must be summed
/// rather than reported as independent events.
#[must_use]
pub fn aggregate(records: impl IntoIterator<Item = AssetRecord>) -> Vec<AssetRecord> {
    let mut by_owner: IndexMap<Address, AssetRecord> = IndexMap::new();

    for record in records {
        match by_owner.entry(record.owner.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(&record),
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }

    by_owner.into_values().collect()
}
