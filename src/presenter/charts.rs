//! Chart rendering via plotters.
//!
//! Two artifacts, both PNG files:
//! - Line chart of gas used per transaction over time
//! - Pie chart of counterparty distribution (top slices + "Others")

use super::format::{format_timestamp, short_hex};
use crate::aggregator::counterparty_counts;
use crate::api::Transaction;
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

/// Characters of an address kept in a pie slice label
const SLICE_PREFIX_LEN: usize = 10;

/// Fixed palette cycled across pie slices
const SLICE_COLORS: [RGBColor; 6] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(120, 144, 156),
];

/// Build the (date, gas) series for the line chart, one point per record
/// in original order
pub fn gas_series(transactions: &[Transaction]) -> Vec<(String, u64)> {
    transactions
        .iter()
        .map(|tx| (format_timestamp(&tx.time_stamp), tx.gas()))
        .collect()
}

/// Build the pie slices: top `top_n` counterparties by count, plus an
/// "Others" bucket when any remainder exists.
///
/// Slice counts always sum to the number of records with a non-empty
/// recipient. Ties sort by first appearance in the transaction sequence.
pub fn pie_slices(transactions: &[Transaction], top_n: usize) -> Vec<(String, u64)> {
    let mut counts = counterparty_counts(transactions);
    // Stable sort keeps first-appearance order for equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut slices: Vec<(String, u64)> = counts
        .iter()
        .take(top_n)
        .map(|(address, count)| (short_hex(address, SLICE_PREFIX_LEN), *count))
        .collect();

    let others: u64 = counts.iter().skip(top_n).map(|(_, count)| count).sum();
    if others > 0 {
        slices.push(("Others".to_string(), others));
    }

    slices
}

/// Write the gas usage line chart to `path`.
///
/// A no-op for an empty record sequence.
pub fn write_gas_chart(transactions: &[Transaction], path: &Path) -> Result<(), ChartError> {
    if transactions.is_empty() {
        debug!("No transactions; skipping gas chart");
        return Ok(());
    }

    let series = gas_series(transactions);
    let labels: Vec<String> = series.iter().map(|(date, _)| date.clone()).collect();

    let x_max = series.len().saturating_sub(1).max(1) as f64;
    let y_max = series.iter().map(|(_, gas)| *gas).max().unwrap_or(0).max(1) as f64 * 1.1;

    let root = BitMapBackend::new(path, (960, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Gas used per transaction", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(labels.len().min(6))
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .y_desc("gas used")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            series
                .iter()
                .enumerate()
                .map(|(i, (_, gas))| (i as f64, *gas as f64)),
            &RED,
        ))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    info!("Gas chart written to: {}", path.display());

    Ok(())
}

/// Write the counterparty distribution pie chart to `path`.
///
/// A no-op when no record has a non-empty recipient.
pub fn write_pie_chart(
    transactions: &[Transaction],
    top_n: usize,
    path: &Path,
) -> Result<(), ChartError> {
    let slices = pie_slices(transactions, top_n);
    if slices.is_empty() {
        debug!("No counterparties; skipping pie chart");
        return Ok(());
    }

    let sizes: Vec<f64> = slices.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = slices
        .iter()
        .map(|(label, count)| format!("{} ({})", label, count))
        .collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
        .collect();

    let root = BitMapBackend::new(path, (700, 520)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let center = (350, 260);
    let radius = 190.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font());

    root.draw(&pie).map_err(draw_err)?;
    root.present().map_err(draw_err)?;
    info!("Counterparty chart written to: {}", path.display());

    Ok(())
}

/// Collapse plotters' backend-generic errors into a plain message
fn draw_err<E: Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}
