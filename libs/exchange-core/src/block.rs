//! Block input model
//!
//! The slice of a block the extractor consumes: transaction traces with
//! their internal calls and the raw logs each call emitted. Log ordinals are
//! assigned upstream, strictly increasing across the whole block, and are
//! the point-in-time key for every as-of store read.

use alloy::primitives::{Address, Bytes, B256};
use serde::Deserialize;

/// One block's worth of transaction traces.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub number: u64,
    /// Unix timestamp of the block, in seconds.
    pub timestamp: u64,
    pub transactions: Vec<TransactionTrace>,
}

/// A single executed transaction with its internal calls.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionTrace {
    pub hash: B256,
    /// Externally-owned account that signed the transaction.
    pub from: Address,
    pub calls: Vec<Call>,
}

/// One call frame within a transaction trace.
#[derive(Debug, Clone, Deserialize)]
pub struct Call {
    /// Contract the call executed against.
    pub address: Address,
    /// Position of the call within its transaction.
    #[serde(default)]
    pub index: u32,
    /// Set when the call's state changes were rolled back; such calls emit
    /// no records.
    #[serde(default)]
    pub state_reverted: bool,
    pub logs: Vec<RawLog>,
}

/// An undecoded log as emitted by a contract.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLog {
    /// Contract that emitted the log.
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    /// Position of the log within its block.
    pub ordinal: u64,
}

impl RawLog {
    /// The event signature topic, if any.
    pub fn topic0(&self) -> Option<&B256> {
        self.topics.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_deserializes_from_json() {
        let payload = r#"{
            "number": 6810706,
            "timestamp": 1600417794,
            "transactions": [
                {
                    "hash": "0x7a12f6d1e0c58c2c8c6ee68a4a77f5b0b13b2f0f3b82f21eaf2b62b4e4e4f2aa",
                    "from": "0x1b96b92314c44b159149f7e0303511fb2fc4774f",
                    "calls": [
                        {
                            "address": "0x1b96b92314c44b159149f7e0303511fb2fc4774f",
                            "index": 2,
                            "state_reverted": false,
                            "logs": [
                                {
                                    "address": "0x1b96b92314c44b159149f7e0303511fb2fc4774f",
                                    "topics": [
                                        "0x1c411e9a96e071241c2f21f7726b17ae89e3cab4c78be50e062b03a9fffbbad1"
                                    ],
                                    "data": "0x00000000000000000000000000000000000000000000003635c9adc5dea0000000000000000000000000000000000000000000000000006c6b935b8bbd400000",
                                    "ordinal": 5
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let block: Block = serde_json::from_str(payload).unwrap();
        assert_eq!(block.number, 6810706);
        assert_eq!(block.transactions.len(), 1);

        let call = &block.transactions[0].calls[0];
        assert_eq!(call.index, 2);
        assert!(!call.state_reverted);

        let log = &call.logs[0];
        assert_eq!(log.ordinal, 5);
        assert_eq!(log.topics.len(), 1);
        assert_eq!(log.data.len(), 64);
    }

    #[test]
    fn call_flags_default_when_absent() {
        let payload = r#"{
            "address": "0x1b96b92314c44b159149f7e0303511fb2fc4774f",
            "logs": []
        }"#;

        let call: Call = serde_json::from_str(payload).unwrap();
        assert_eq!(call.index, 0);
        assert!(!call.state_reverted);
        assert!(call.logs.is_empty());
    }
}
