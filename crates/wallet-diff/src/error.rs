use thiserror::Error;

use crate::codec::Hash256;

#[derive(Debug, Error)]
pub enum WalletDiffError {
    /// An input pointer could not be traced back to its creating output.
    ///
    /// Fatal for the whole run: an unresolved input understates the amounts
    /// consumed and would falsify the diff.
    #[error("unresolved input {hint}:{key}: {message}")]
    UnresolvedInput {
        hint: u32,
        key: Hash256,
        message: String,
    },

    /// A wire amount is not an exact base-10 integer.
    #[error("malformed amount for field '{field}': '{value}'")]
    MalformedAmount { field: String, value: String },

    #[error("Invalid node response: {0}")]
    InvalidResponse(String),

    #[error("Node request failed with HTTP {status} for {url}: {message}")]
    HttpStatus {
        status: i32,
        url: String,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}
