//! Mint event decoder
//!
//! Event signature: Mint(address indexed sender, uint256 amount0, uint256 amount1)
//! Topic0: 0x4c209b5fc8ad50758f13e2e1088ba56a560dff690a1c6fef26394f4c03821c4f

use alloy::primitives::{Address, U256};

use crate::{block::RawLog, error::DecodeError};

/// Decoded liquidity deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintEvent {
    pub sender: Address,
    pub amount0: U256,
    pub amount1: U256,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode a Mint event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
/// - topics[1]: sender (indexed)
///
/// Data layout (each 32 bytes):
/// - bytes 0-32: amount0
/// - bytes 32-64: amount1
pub fn decode(log: &RawLog) -> Result<MintEvent, DecodeError> {
    if log.topics.len() < 2 {
        return Err(DecodeError::MissingTopics {
            event: "Mint",
            expected: 2,
            actual: log.topics.len(),
        });
    }

    if log.data.len() < 64 {
        return Err(DecodeError::ShortData {
            event: "Mint",
            expected: 64,
            actual: log.data.len(),
        });
    }

    let sender = Address::from_slice(&log.topics[1][12..32]);
    let amount0 = U256::from_be_slice(&log.data[0..32]);
    let amount1 = U256::from_be_slice(&log.data[32..64]);

    Ok(MintEvent {
        sender,
        amount0,
        amount1,
        ordinal: log.ordinal,
    })
}
