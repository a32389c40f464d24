//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Fetches the address's transaction history from the explorer
//! 2. Aggregates gas and counterparty statistics
//! 3. Prints a summary and a table of recent transactions
//! 4. Writes the requested chart files

use crate::aggregator::aggregate;
use crate::api::EtherscanClient;
use crate::presenter::{render_table, write_gas_chart, write_pie_chart};
use crate::utils::config::{Settings, DEFAULT_DISPLAY_LIMIT, DEFAULT_TOP_SLICES};
use crate::utils::error::ValidationError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Address to analyze (0x-prefixed, 40 hex characters)
    pub address: String,

    /// Maximum number of rows in the transaction table
    pub limit: usize,

    /// Number of pie slices before the remainder collapses into "Others"
    pub top_slices: usize,

    /// Output path for the gas usage chart (None = suppressed)
    pub gas_chart: Option<PathBuf>,

    /// Output path for the counterparty pie chart (None = suppressed)
    pub pie_chart: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            address: String::new(),
            limit: DEFAULT_DISPLAY_LIMIT,
            top_slices: DEFAULT_TOP_SLICES,
            gas_chart: Some(PathBuf::from("gas-usage.png")),
            pie_chart: Some(PathBuf::from("counterparties.png")),
        }
    }
}

/// Validate analyze arguments before any network activity
///
/// # Errors
/// * `ValidationError::InvalidAddress` - address is not 0x + 40 hex characters
/// * `ValidationError::ZeroLimit` - table limit is zero
pub fn validate_args(args: &AnalyzeArgs) -> Result<(), ValidationError> {
    let hex = args
        .address
        .strip_prefix("0x")
        .ok_or_else(|| ValidationError::InvalidAddress(args.address.clone()))?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidAddress(args.address.clone()));
    }

    if args.limit == 0 {
        return Err(ValidationError::ZeroLimit);
    }

    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Explorer fetch failures (transport, rate limit, API rejection)
/// * Chart file write errors
pub fn execute_analyze(args: &AnalyzeArgs, settings: &Settings) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing address: {}", args.address);

    let client = EtherscanClient::new(settings).context("Failed to create explorer client")?;

    let transactions = client
        .fetch_transactions(&args.address)
        .context("Failed to fetch transaction history")?;

    if transactions.is_empty() {
        println!("No transactions found for {}", args.address);
        return Ok(());
    }

    debug!("Fetched {} transactions", transactions.len());

    let stats = aggregate(&transactions);

    println!("Total transactions:  {}", stats.tx_count);
    println!("Average gas used:    {:.2}", stats.average_gas);
    match &stats.top_counterparty {
        Some(top) => println!(
            "Top counterparty:    {} ({} transactions)",
            top.address, top.count
        ),
        None => println!("Top counterparty:    none"),
    }

    println!("{}", render_table(&transactions, args.limit));

    if let Some(path) = &args.gas_chart {
        write_gas_chart(&transactions, path).context("Failed to write gas chart")?;
        println!("✓ Gas chart: {}", path.display());
    }

    if let Some(path) = &args.pie_chart {
        write_pie_chart(&transactions, args.top_slices, path)
            .context("Failed to write counterparty chart")?;
        println!("✓ Counterparty chart: {}", path.display());
    }

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
