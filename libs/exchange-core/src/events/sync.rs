//! Sync event decoder
//!
//! Event signature: Sync(uint112 reserve0, uint112 reserve1)
//! Topic0: 0x1c411e9a96e071241c2f21f7726b17ae89e3cab4c78be50e062b03a9fffbbad1
//!
//! The pair emits Sync after every state change, so this is the reserve
//! checkpoint everything else hangs off.

use alloy::primitives::U256;

use crate::{block::RawLog, error::DecodeError};

/// Decoded reserve checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEvent {
    pub reserve0: U256,
    pub reserve1: U256,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode a Sync event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
///
/// Data layout (each 32 bytes):
/// - bytes 0-32: reserve0
/// - bytes 32-64: reserve1
pub fn decode(log: &RawLog) -> Result<SyncEvent, DecodeError> {
    if log.topics.is_empty() {
        return Err(DecodeError::MissingTopics {
            event: "Sync",
            expected: 1,
            actual: 0,
        });
    }

    if log.data.len() < 64 {
        return Err(DecodeError::ShortData {
            event: "Sync",
            expected: 64,
            actual: log.data.len(),
        });
    }

    let reserve0 = U256::from_be_slice(&log.data[0..32]);
    let reserve1 = U256::from_be_slice(&log.data[32..64]);

    Ok(SyncEvent {
        reserve0,
        reserve1,
        ordinal: log.ordinal,
    })
}
