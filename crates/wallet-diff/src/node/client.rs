//! Blocking REST client for a chain node.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{OutputRef, TxId};
use crate::error::WalletDiffError;
use crate::node::{BuildScriptTxParams, BuildScriptTxResult, NodeApi, TransactionDetail};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the node REST API.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout_secs: u64,
}

impl Client {
    /// Creates a client for the given node base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WalletDiffError> {
        let response = minreq::get(url).with_timeout(self.timeout_secs).send()?;
        Self::check_status(url, &response)?;

        Ok(response.json()?)
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<T, WalletDiffError> {
        let response = minreq::post(url)
            .with_timeout(self.timeout_secs)
            .with_json(body)?
            .send()?;
        Self::check_status(url, &response)?;

        Ok(response.json()?)
    }

    fn check_status(url: &str, response: &minreq::Response) -> Result<(), WalletDiffError> {
        if (200..300).contains(&response.status_code) {
            return Ok(());
        }

        Err(WalletDiffError::HttpStatus {
            status: response.status_code,
            url: url.to_owned(),
            message: response.as_str().unwrap_or("").trim().to_owned(),
        })
    }
}

impl NodeApi for Client {
    fn creating_transaction(&self, output_ref: &OutputRef) -> Result<TxId, WalletDiffError> {
        let url = format!(
            "{}/transactions/tx-id-from-outputref?hint={}&key={}",
            self.base_url, output_ref.hint, output_ref.key
        );
        tracing::debug!(
            "looking up creating transaction for output {}:{}",
            output_ref.hint,
            output_ref.key
        );

        let response = minreq::get(&url).with_timeout(self.timeout_secs).send()?;
        if response.status_code == 404 {
            return Err(WalletDiffError::UnresolvedInput {
                hint: output_ref.hint,
                key: output_ref.key,
                message: response.as_str().unwrap_or("").trim().to_owned(),
            });
        }
        Self::check_status(&url, &response)?;

        Ok(response.json()?)
    }

    fn transaction_detail(&self, tx_id: &TxId) -> Result<TransactionDetail, WalletDiffError> {
        let url = format!("{}/transactions/details/{tx_id}", self.base_url);

        self.get_json(&url)
    }

    fn build_script_tx(
        &self,
        params: &BuildScriptTxParams,
    ) -> Result<BuildScriptTxResult, WalletDiffError> {
        let url = format!("{}/transactions/build-script-tx", self.base_url);
        tracing::debug!("building script transaction for {}", params.signer_address);

        self.post_json(&url, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = Client::new("http://127.0.0.1:12973//");
        assert_eq!(client.base_url, "http://127.0.0.1:12973");
    }

    #[test]
    fn timeout_override_is_applied() {
        let client = Client::new("http://127.0.0.1:12973").with_timeout(3);
        assert_eq!(client.timeout_secs, 3);
    }
}
