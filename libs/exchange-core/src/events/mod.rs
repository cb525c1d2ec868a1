//! Event decoders for the pair event set
//!
//! One decoder per event a UniswapV2-style pair contract emits:
//! - Transfer / Approval: liquidity-token ERC-20 activity
//! - Sync: reserve checkpoint after every state change
//! - Mint / Burn: liquidity added to or removed from the pool
//! - Swap: a trade against the reserves

pub mod approval;
pub mod burn;
pub mod mint;
pub mod swap;
pub mod sync;
pub mod transfer;

use std::fmt;

use alloy::primitives::B256;

use crate::{block::RawLog, error::DecodeError, utils};

pub use approval::ApprovalEvent;
pub use burn::BurnEvent;
pub use mint::MintEvent;
pub use swap::SwapEvent;
pub use sync::SyncEvent;
pub use transfer::TransferEvent;

/// Event topics (keccak256 hashes)
pub mod topics {
    use alloy::primitives::{b256, B256};

    /// Transfer(address indexed from, address indexed to, uint256 value)
    pub const TRANSFER: B256 =
        b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
    /// Approval(address indexed owner, address indexed spender, uint256 value)
    pub const APPROVAL: B256 =
        b256!("8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925");
    /// Sync(uint112 reserve0, uint112 reserve1)
    pub const SYNC: B256 =
        b256!("1c411e9a96e071241c2f21f7726b17ae89e3cab4c78be50e062b03a9fffbbad1");
    /// Mint(address indexed sender, uint256 amount0, uint256 amount1)
    pub const MINT: B256 =
        b256!("4c209b5fc8ad50758f13e2e1088ba56a560dff690a1c6fef26394f4c03821c4f");
    /// Burn(address indexed sender, uint256 amount0, uint256 amount1, address indexed to)
    pub const BURN: B256 =
        b256!("dccd412f0b1252819cb1fd330b93224ca42612892bb3f4f789976e6d81936496");
    /// Swap(address indexed sender, uint256 amount0In, uint256 amount1In,
    /// uint256 amount0Out, uint256 amount1Out, address indexed to)
    pub const SWAP: B256 =
        b256!("d78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822");
}

/// The kinds of events a pair contract emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Transfer,
    Approval,
    Sync,
    Mint,
    Burn,
    Swap,
}

impl EventKind {
    /// Map a log's topic0 to an event kind, if it belongs to the pair set.
    pub fn from_topic0(topic0: &B256) -> Option<EventKind> {
        match *topic0 {
            t if t == topics::TRANSFER => Some(EventKind::Transfer),
            t if t == topics::APPROVAL => Some(EventKind::Approval),
            t if t == topics::SYNC => Some(EventKind::Sync),
            t if t == topics::MINT => Some(EventKind::Mint),
            t if t == topics::BURN => Some(EventKind::Burn),
            t if t == topics::SWAP => Some(EventKind::Swap),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Transfer => "Transfer",
            EventKind::Approval => "Approval",
            EventKind::Sync => "Sync",
            EventKind::Mint => "Mint",
            EventKind::Burn => "Burn",
            EventKind::Swap => "Swap",
        };
        f.write_str(name)
    }
}

/// A decoded event from a pair contract, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairEvent {
    Transfer(TransferEvent),
    Approval(ApprovalEvent),
    Sync(SyncEvent),
    Mint(MintEvent),
    Burn(BurnEvent),
    Swap(SwapEvent),
}

impl PairEvent {
    /// Decode a log into its typed event based on its event signature.
    pub fn decode(log: &RawLog) -> Result<PairEvent, DecodeError> {
        let topic0 = match log.topic0() {
            Some(topic0) => topic0,
            None => return Err(DecodeError::MissingSignature),
        };

        match EventKind::from_topic0(topic0) {
            Some(EventKind::Transfer) => Ok(PairEvent::Transfer(transfer::decode(log)?)),
            Some(EventKind::Approval) => Ok(PairEvent::Approval(approval::decode(log)?)),
            Some(EventKind::Sync) => Ok(PairEvent::Sync(sync::decode(log)?)),
            Some(EventKind::Mint) => Ok(PairEvent::Mint(mint::decode(log)?)),
            Some(EventKind::Burn) => Ok(PairEvent::Burn(burn::decode(log)?)),
            Some(EventKind::Swap) => Ok(PairEvent::Swap(swap::decode(log)?)),
            None => Err(DecodeError::UnknownSignature {
                topic0: utils::hash_hex(topic0),
            }),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            PairEvent::Transfer(_) => EventKind::Transfer,
            PairEvent::Approval(_) => EventKind::Approval,
            PairEvent::Sync(_) => EventKind::Sync,
            PairEvent::Mint(_) => EventKind::Mint,
            PairEvent::Burn(_) => EventKind::Burn,
            PairEvent::Swap(_) => EventKind::Swap,
        }
    }

    /// Position of the source log within its block.
    pub fn ordinal(&self) -> u64 {
        match self {
            PairEvent::Transfer(event) => event.ordinal,
            PairEvent::Approval(event) => event.ordinal,
            PairEvent::Sync(event) => event.ordinal,
            PairEvent::Mint(event) => event.ordinal,
            PairEvent::Burn(event) => event.ordinal,
            PairEvent::Swap(event) => event.ordinal,
        }
    }
}
