//! Transfer event decoder
//!
//! Event signature: Transfer(address indexed from, address indexed to, uint256 value)
//! Topic0: 0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef

use alloy::primitives::{Address, U256};

use crate::{block::RawLog, error::DecodeError};

/// Decoded liquidity-token Transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode a Transfer event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
/// - topics[1]: from (indexed)
/// - topics[2]: to (indexed)
///
/// Data layout:
/// - bytes 0-32: value
pub fn decode(log: &RawLog) -> Result<TransferEvent, DecodeError> {
    if log.topics.len() < 3 {
        return Err(DecodeError::MissingTopics {
            event: "Transfer",
            expected: 3,
            actual: log.topics.len(),
        });
    }

    if log.data.len() < 32 {
        return Err(DecodeError::ShortData {
            event: "Transfer",
            expected: 32,
            actual: log.data.len(),
        });
    }

    let from = Address::from_slice(&log.topics[1][12..32]);
    let to = Address::from_slice(&log.topics[2][12..32]);
    let value = U256::from_be_slice(&log.data[0..32]);

    Ok(TransferEvent {
        from,
        to,
        value,
        ordinal: log.ordinal,
    })
}
