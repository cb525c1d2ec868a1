//! Swap event decoder
//!
//! Event signature: Swap(address indexed sender, uint256 amount0In, uint256 amount1In,
//! uint256 amount0Out, uint256 amount1Out, address indexed to)
//! Topic0: 0xd78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822

use alloy::primitives::{Address, U256};

use crate::{block::RawLog, error::DecodeError};

/// Decoded trade against the pair's reserves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapEvent {
    pub sender: Address,
    pub to: Address,
    pub amount0_in: U256,
    pub amount1_in: U256,
    pub amount0_out: U256,
    pub amount1_out: U256,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode a Swap event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
/// - topics[1]: sender (indexed)
/// - topics[2]: to (indexed)
///
/// Data layout (each 32 bytes):
/// - bytes 0-32: amount0In
/// - bytes 32-64: amount1In
/// - bytes 64-96: amount0Out
/// - bytes 96-128: amount1Out
pub fn decode(log: &RawLog) -> Result<SwapEvent, DecodeError> {
    if log.topics.len() < 3 {
        return Err(DecodeError::MissingTopics {
            event: "Swap",
            expected: 3,
            actual: log.topics.len(),
        });
    }

    if log.data.len() < 128 {
        return Err(DecodeError::ShortData {
            event: "Swap",
            expected: 128,
            actual: log.data.len(),
        });
    }

    let sender = Address::from_slice(&log.topics[1][12..32]);
    let to = Address::from_slice(&log.topics[2][12..32]);
    let amount0_in = U256::from_be_slice(&log.data[0..32]);
    let amount1_in = U256::from_be_slice(&log.data[32..64]);
    let amount0_out = U256::from_be_slice(&log.data[64..96]);
    let amount1_out = U256::from_be_slice(&log.data[96..128]);

    Ok(SwapEvent {
        sender,
        to,
        amount0_in,
        amount1_in,
        amount0_out,
        amount1_out,
        ordinal: log.ordinal,
    })
}
