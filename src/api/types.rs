//! Types for the Etherscan account API.
//!
//! The explorer wraps every reply in a `{status, message, result}` envelope.
//! On success `result` is an array of transaction objects; on failure it is
//! usually a string with extra detail (e.g. "Max rate limit reached").

use serde::Deserialize;

/// Response envelope for the `txlist` action
#[derive(Debug, Deserialize)]
pub struct TxListResponse {
    pub status: String,
    pub message: String,
    /// Kept as `serde_json::Value` because its shape depends on `status`.
    #[serde(default)]
    pub result: serde_json::Value,
}

/// One transaction record as returned by the explorer.
///
/// The upstream schema has many more fields; we only deserialize the ones
/// the pipeline uses and ignore the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash (0x-prefixed hex)
    pub hash: String,

    /// Sender address
    pub from: String,

    /// Recipient address; empty for contract-creation transactions
    #[serde(default)]
    pub to: String,

    /// Gas used, as a decimal string
    pub gas_used: String,

    /// UNIX seconds, as a decimal string
    pub time_stamp: String,
}

impl Transaction {
    /// Gas used as an integer; records with an unparsable value count as 0
    pub fn gas(&self) -> u64 {
        self.gas_used.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserializes_camel_case() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "hash": "0xabc",
                "from": "0x1111111111111111111111111111111111111111",
                "to": "0x2222222222222222222222222222222222222222",
                "gasUsed": "21000",
                "timeStamp": "1700000000",
                "blockNumber": "123"
            }"#,
        )
        .unwrap();

        assert_eq!(tx.gas(), 21000);
        assert_eq!(tx.time_stamp, "1700000000");
    }

    #[test]
    fn test_missing_to_defaults_to_empty() {
        let tx: Transaction = serde_json::from_str(
            r#"{"hash": "0xabc", "from": "0x1", "gasUsed": "100", "timeStamp": "0"}"#,
        )
        .unwrap();

        assert!(tx.to.is_empty());
    }

    #[test]
    fn test_unparsable_gas_counts_as_zero() {
        let tx: Transaction = serde_json::from_str(
            r#"{"hash": "0xabc", "from": "0x1", "to": "0x2", "gasUsed": "oops", "timeStamp": "0"}"#,
        )
        .unwrap();

        assert_eq!(tx.gas(), 0);
    }
}
