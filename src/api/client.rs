//! HTTP client for fetching an address's transaction history from Etherscan.

use super::types::{Transaction, TxListResponse};
use crate::utils::config::{Settings, END_BLOCK, SORT_ORDER, START_BLOCK, SUCCESS_STATUS};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for the explorer's account-transaction-list endpoint
pub struct EtherscanClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl EtherscanClient {
    /// Create a new explorer client from resolved settings
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Fetch the full transaction history for `address`, oldest first.
    ///
    /// One GET over the full block range; records come back exactly as the
    /// explorer returned them. Address shape validation is the caller's job.
    ///
    /// # Errors
    /// * `FetchError::Transport` - network failure, timeout, HTTP error, or non-JSON body
    /// * `FetchError::RateLimited` - the explorer reported a rate limit
    /// * `FetchError::Api` - any other explorer-side rejection
    /// * `FetchError::Json` - success status but a malformed result array
    pub fn fetch_transactions(&self, address: &str) -> Result<Vec<Transaction>, FetchError> {
        info!("Fetching transactions for address: {}", address);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address),
                ("startblock", START_BLOCK),
                ("endblock", END_BLOCK),
                ("sort", SORT_ORDER),
                ("apikey", &self.api_key),
            ])
            .send()
            .map_err(FetchError::Transport)?
            .error_for_status()
            .map_err(FetchError::Transport)?;

        let body: TxListResponse = response.json().map_err(FetchError::Transport)?;

        debug!(
            "Explorer replied: status={} message={}",
            body.status, body.message
        );

        parse_txlist_response(body)
    }
}

/// Turn the explorer's response envelope into transaction records.
///
/// Split out of the client so the status and rate-limit paths can be
/// exercised without a network.
pub fn parse_txlist_response(body: TxListResponse) -> Result<Vec<Transaction>, FetchError> {
    if body.status != SUCCESS_STATUS {
        let detail = match &body.result {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if is_rate_limited(&body.message, &detail) {
            return Err(FetchError::RateLimited {
                message: body.message,
                detail,
            });
        }

        return Err(FetchError::Api {
            message: body.message,
            detail,
        });
    }

    serde_json::from_value(body.result).map_err(FetchError::Json)
}

/// Detect the explorer's rate-limit rejection from its message/result text
fn is_rate_limited(message: &str, detail: &str) -> bool {
    let haystack = format!("{} {}", message, detail).to_lowercase();
    haystack.contains("rate limit")
}
