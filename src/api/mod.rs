//! HTTP access to the Etherscan account API.
//!
//! This module owns the outbound request and the response envelope;
//! everything downstream works on plain `Transaction` records.

pub mod client;
pub mod types;

// Re-export main types and functions
pub use client::{parse_txlist_response, EtherscanClient};
pub use types::{Transaction, TxListResponse};
