//! Burn event decoder
//!
//! Event signature: Burn(address indexed sender, uint256 amount0, uint256 amount1, address indexed to)
//! Topic0: 0xdccd412f0b1252819cb1fd330b93224ca42612892bb3f4f789976e6d81936496

use alloy::primitives::{Address, U256};

use crate::{block::RawLog, error::DecodeError};

/// Decoded liquidity withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnEvent {
    pub sender: Address,
    pub amount0: U256,
    pub amount1: U256,
    /// Recipient of the withdrawn tokens.
    pub to: Address,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode a Burn event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
/// - topics[1]: sender (indexed)
/// - topics[2]: to (indexed)
///
/// Data layout (each 32 bytes):
/// - bytes 0-32: amount0
/// - bytes 32-64: amount1
pub fn decode(log: &RawLog) -> Result<BurnEvent, DecodeError> {
    if log.topics.len() < 3 {
        return Err(DecodeError::MissingTopics {
            event: "Burn",
            expected: 3,
            actual: log.topics.len(),
        });
    }

    if log.data.len() < 64 {
        return Err(DecodeError::ShortData {
            event: "Burn",
            expected: 64,
            actual: log.data.len(),
        });
    }

    let sender = Address::from_slice(&log.topics[1][12..32]);
    let to = Address::from_slice(&log.topics[2][12..32]);
    let amount0 = U256::from_be_slice(&log.data[0..32]);
    let amount1 = U256::from_be_slice(&log.data[32..64]);

    Ok(BurnEvent {
        sender,
        amount0,
        amount1,
        to,
        ordinal: log.ordinal,
    })
}
