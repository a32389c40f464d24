//! Presentation of fetched records and computed statistics.
//!
//! This module handles everything the user sees:
//! - Console table of recent transactions
//! - Gas usage line chart (PNG)
//! - Counterparty distribution pie chart (PNG)

pub mod charts;
pub mod format;
pub mod table;

// Re-export main functions
pub use charts::{gas_series, pie_slices, write_gas_chart, write_pie_chart};
pub use format::{format_gas, format_timestamp, short_hex};
pub use table::render_table;
