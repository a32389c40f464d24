//! Summary statistics over a fetched transaction sequence.
//!
//! Everything here is a pure function of its input; fetching happens in
//! `api` and printing/plotting in `presenter`.

use crate::api::Transaction;
use log::debug;
use std::collections::HashMap;

/// Aggregate statistics for one transaction history
#[derive(Debug, Clone, PartialEq)]
pub struct TxStats {
    /// Number of transactions in the history
    pub tx_count: usize,

    /// Sum of gas used across all transactions
    pub total_gas: u64,

    /// Mean gas used per transaction; 0.0 for an empty history
    pub average_gas: f64,

    /// Most frequent counterparty, or `None` when no transaction
    /// has a non-empty recipient
    pub top_counterparty: Option<Counterparty>,
}

/// A counterparty address with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    pub address: String,
    pub count: u64,
}

/// Compute aggregate statistics for a transaction sequence
///
/// # Arguments
/// * `transactions` - records in original (received) order; may be empty
///
/// # Returns
/// Freshly computed statistics; never divides by zero.
///
/// Ties for the most frequent counterparty resolve to the address that
/// first appears earliest in the transaction sequence.
pub fn aggregate(transactions: &[Transaction]) -> TxStats {
    let total_gas: u64 = transactions.iter().map(Transaction::gas).sum();

    let average_gas = if transactions.is_empty() {
        0.0
    } else {
        total_gas as f64 / transactions.len() as f64
    };

    let counts = counterparty_counts(transactions);
    debug!(
        "Aggregated {} transactions across {} counterparties",
        transactions.len(),
        counts.len()
    );

    // First-appearance order plus a strict comparison pins the tie-break.
    let mut top: Option<Counterparty> = None;
    for (address, count) in &counts {
        if top.as_ref().map_or(true, |best| *count > best.count) {
            top = Some(Counterparty {
                address: address.clone(),
                count: *count,
            });
        }
    }

    TxStats {
        tx_count: transactions.len(),
        total_gas,
        average_gas,
        top_counterparty: top,
    }
}

/// Count occurrences of each non-empty `to` address.
///
/// Results come back in order of first appearance, so downstream
/// consumers get a deterministic ordering for equal counts.
/// Contract-creation transactions (empty `to`) are skipped.
pub fn counterparty_counts(transactions: &[Transaction]) -> Vec<(String, u64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for tx in transactions {
        if tx.to.is_empty() {
            continue;
        }

        match index.get(tx.to.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(tx.to.as_str(), counts.len());
                counts.push((tx.to.clone(), 1));
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(to: &str, gas_used: &str) -> Transaction {
        Transaction {
            hash: "0xhash".to_string(),
            from: "0xfrom".to_string(),
            to: to.to_string(),
            gas_used: gas_used.to_string(),
            time_stamp: "1700000000".to_string(),
        }
    }

    #[test]
    fn test_aggregate_average_and_top() {
        let txs = vec![tx("0xAAA", "21000"), tx("0xAAA", "42000"), tx("0xBBB", "21000")];

        let stats = aggregate(&txs);

        assert_eq!(stats.tx_count, 3);
        assert_eq!(stats.total_gas, 84000);
        assert_eq!(stats.average_gas, 28000.0);

        let top = stats.top_counterparty.unwrap();
        assert_eq!(top.address, "0xAAA");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);

        assert_eq!(stats.tx_count, 0);
        assert_eq!(stats.total_gas, 0);
        assert_eq!(stats.average_gas, 0.0);
        assert!(stats.top_counterparty.is_none());
    }

    #[test]
    fn test_contract_creation_does_not_count() {
        let txs = vec![tx("", "50000"), tx("", "50000")];

        let stats = aggregate(&txs);

        // Gas still counts towards the average, the recipient does not.
        assert_eq!(stats.average_gas, 50000.0);
        assert!(stats.top_counterparty.is_none());
    }

    #[test]
    fn test_tie_resolves_to_earliest_first_appearance() {
        let txs = vec![tx("0xAAA", "1"), tx("0xBBB", "1"), tx("0xBBB", "1"), tx("0xAAA", "1")];

        let top = aggregate(&txs).top_counterparty.unwrap();
        assert_eq!(top.address, "0xAAA");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_counterparty_counts_first_appearance_order() {
        let txs = vec![tx("0xBBB", "1"), tx("0xAAA", "1"), tx("0xBBB", "1")];

        let counts = counterparty_counts(&txs);
        assert_eq!(
            counts,
            vec![("0xBBB".to_string(), 2), ("0xAAA".to_string(), 1)]
        );
    }
}
