//! Eth Tx Analyzer CLI
//!
//! Fetches an address's transaction history from Etherscan, prints
//! aggregate statistics and a table of recent transactions, and writes
//! gas usage and counterparty distribution charts.

use clap::Parser;
use env_logger::Env;
use eth_tx_analyzer::commands::{execute_analyze, validate_args, AnalyzeArgs};
use eth_tx_analyzer::utils::config::{Settings, DEFAULT_DISPLAY_LIMIT, DEFAULT_TOP_SLICES};
use std::path::PathBuf;
use std::process::ExitCode;

/// Eth Tx Analyzer - transaction statistics and charts for an Ethereum address
#[derive(Parser, Debug)]
#[command(name = "eth-tx")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to analyze (0x-prefixed, 40 hex characters)
    address: String,

    /// Maximum number of rows in the transaction table
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Number of pie slices before the remainder collapses into "Others"
    #[arg(long, default_value_t = DEFAULT_TOP_SLICES)]
    top_slices: usize,

    /// Output path for the gas usage chart
    #[arg(long, default_value = "gas-usage.png")]
    gas_chart: PathBuf,

    /// Skip the gas usage chart
    #[arg(long)]
    no_gas_chart: bool,

    /// Output path for the counterparty pie chart
    #[arg(long, default_value = "counterparties.png")]
    pie_chart: PathBuf,

    /// Skip the counterparty pie chart
    #[arg(long)]
    no_pie_chart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Errors surface as one human-readable line, never a backtrace.
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Missing API key is a startup error, before any network activity
    let settings = Settings::from_env()?;

    let args = AnalyzeArgs {
        address: cli.address,
        limit: cli.limit,
        top_slices: cli.top_slices,
        gas_chart: (!cli.no_gas_chart).then_some(cli.gas_chart),
        pie_chart: (!cli.no_pie_chart).then_some(cli.pie_chart),
    };

    // Validate args first
    validate_args(&args)?;

    // Execute analysis
    execute_analyze(&args, &settings)?;

    Ok(())
}
