//! Console table of recent transactions.

use super::format::{format_gas, format_timestamp, short_hex};
use crate::api::Transaction;
use comfy_table::{presets, Table};

/// Characters of a hash/address kept before the "..." marker
const HEX_PREFIX_LEN: usize = 10;

/// Render up to `limit` transactions as a table.
///
/// The caller prints the returned table; nothing is written here so the
/// renderer stays testable without capturing stdout.
pub fn render_table(transactions: &[Transaction], limit: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Hash", "From", "To", "Gas Used", "Date"]);

    for tx in transactions.iter().take(limit) {
        table.add_row(vec![
            short_hex(&tx.hash, HEX_PREFIX_LEN),
            short_hex(&tx.from, HEX_PREFIX_LEN),
            short_hex(&tx.to, HEX_PREFIX_LEN),
            format_gas(tx.gas()),
            format_timestamp(&tx.time_stamp),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(hash: &str, time_stamp: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            from: "0xf00000000000000000000000000000000000000f".to_string(),
            to: "0xa0000000000000000000000000000000000000aa".to_string(),
            gas_used: "21000".to_string(),
            time_stamp: time_stamp.to_string(),
        }
    }

    #[test]
    fn test_table_respects_row_limit() {
        let txs: Vec<Transaction> = (0..15)
            .map(|i| tx(&format!("0xhash{:02}", i), "1700000000"))
            .collect();

        let table = render_table(&txs, 10);
        assert_eq!(table.row_iter().count(), 10);
    }

    #[test]
    fn test_table_empty_input_has_no_rows() {
        let table = render_table(&[], 10);
        assert_eq!(table.row_iter().count(), 0);
    }

    #[test]
    fn test_table_bad_timestamp_renders_invalid() {
        let table = render_table(&[tx("0xa", "not-a-number")], 10);
        let rendered = table.to_string();
        assert!(rendered.contains("Invalid"));
    }

    #[test]
    fn test_table_formats_gas_and_prefixes() {
        let table = render_table(&[tx("0x123456789abcdef0", "1700000000")], 10);
        let rendered = table.to_string();
        assert!(rendered.contains("0x12345678..."));
        assert!(rendered.contains("21,000"));
        assert!(rendered.contains("2023-11-14 22:13:20"));
    }
}
