//! Eth Tx Analyzer
//!
//! Transaction history analysis and charting for Ethereum
//! addresses, backed by the Etherscan account API.
//!
//! This crate provides the core implementation for the
//! `eth-tx` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install eth-tx-analyzer
//! eth-tx --help
//! ```

pub mod aggregator;
pub mod api;
pub mod commands;
pub mod presenter;
pub mod utils;
