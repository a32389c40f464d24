//! Configuration and constants for the CLI.

use std::env;
use std::time::Duration;

use super::error::ConfigError;

/// Default base URL for the Etherscan account API
pub const ETHERSCAN_BASE_URL: &str = "https://api.etherscan.io/api";

/// Default timeout for explorer requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Status value the explorer returns on success
pub const SUCCESS_STATUS: &str = "1";

// Query constants for the txlist endpoint (full block range, oldest first)
pub const START_BLOCK: &str = "0";
pub const END_BLOCK: &str = "99999999";
pub const SORT_ORDER: &str = "asc";

/// Default number of rows in the transaction table
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Default number of pie slices before the remainder collapses into "Others"
pub const DEFAULT_TOP_SLICES: usize = 5;

/// Runtime settings, resolved once at startup and passed explicitly
/// to the components that need them.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Etherscan API key
    pub api_key: String,

    /// Base URL of the explorer API
    pub base_url: String,

    /// Timeout applied to every explorer request
    pub timeout: Duration,
}

impl Settings {
    /// Create settings with an explicit key and base URL (used by tests
    /// to point the client at a fake server).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Load settings from the process environment, honoring a local
    /// `.env` file if present.
    ///
    /// # Errors
    /// * `ConfigError::MissingApiKey` - `ETHERSCAN_API_KEY` is absent or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine; the variables may come from the environment.
        dotenvy::dotenv().ok();

        let api_key = env::var("ETHERSCAN_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url =
            env::var("ETHERSCAN_BASE_URL").unwrap_or_else(|_| ETHERSCAN_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url,
            timeout: DEFAULT_HTTP_TIMEOUT,
        })
    }
}
