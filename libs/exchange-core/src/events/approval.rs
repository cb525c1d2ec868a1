//! Approval event decoder
//!
//! Event signature: Approval(address indexed owner, address indexed spender, uint256 value)
//! Topic0: 0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925

use alloy::primitives::{Address, U256};

use crate::{block::RawLog, error::DecodeError};

/// Decoded liquidity-token Approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
    /// Position of the source log within its block.
    pub ordinal: u64,
}

/// Decode an Approval event from raw log data
///
/// Topics layout:
/// - topics[0]: event signature
/// - topics[1]: owner (indexed)
/// - topics[2]: spender (indexed)
///
/// Data layout:
/// - bytes 0-32: value
pub fn decode(log: &RawLog) -> Result<ApprovalEvent, DecodeError> {
    if log.topics.len() < 3 {
        return Err(DecodeError::MissingTopics {
            event: "Approval",
            expected: 3,
            actual: log.topics.len(),
        });
    }

    if log.data.len() < 32 {
        return Err(DecodeError::ShortData {
            event: "Approval",
            expected: 32,
            actual: log.data.len(),
        });
    }

    let owner = Address::from_slice(&log.topics[1][12..32]);
    let spender = Address::from_slice(&log.topics[2][12..32]);
    let value = U256::from_be_slice(&log.data[0..32]);

    Ok(ApprovalEvent {
        owner,
        spender,
        value,
        ordinal: log.ordinal,
    })
}
