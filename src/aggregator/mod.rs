//! Aggregation of transaction records into summary statistics.
//!
//! Pure functions over the fetched records:
//! - Total and average gas used
//! - Counterparty occurrence counts
//! - Most frequent counterparty

pub mod stats;

// Re-export main types and functions
pub use stats::{aggregate, counterparty_counts, Counterparty, TxStats};
