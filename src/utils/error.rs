//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching transactions from the explorer
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("explorer rejected the request: {message} ({detail})")]
    Api { message: String, detail: String },

    #[error("explorer rate limit reached: {message} ({detail}); try again later")]
    RateLimited { message: String, detail: String },

    #[error("unexpected result payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported before any network activity takes place
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid address {0:?}: expected 0x followed by 40 hex characters")]
    InvalidAddress(String),

    #[error("display limit must be greater than zero")]
    ZeroLimit,
}

/// Errors raised while loading startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ETHERSCAN_API_KEY is not set; export it or add it to a .env file")]
    MissingApiKey,
}

/// Errors that can occur while writing chart files
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Draw(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
