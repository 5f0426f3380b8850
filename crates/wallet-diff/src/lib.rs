#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod address;
pub mod asset;
pub mod codec;
pub mod diff;
pub mod error;
pub mod node;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_support;

pub use address::{Address, LockupScript};
pub use asset::{Amount, AssetRecord, TokenId, aggregate, parse_amount};
pub use codec::{AssetOutput, Hash256, OutputRef, TxId, TxInput, UnsignedTransaction};
pub use diff::{AssetDiff, SignedAmount};
pub use error::WalletDiffError;
pub use runtime::{DiffRuntime, extract_outputs, resolve_inputs, simulation_diff};
