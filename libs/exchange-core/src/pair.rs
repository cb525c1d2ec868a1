//! Tracked pairs and the directory that resolves them.

use std::collections::HashMap;

use alloy::primitives::Address;
use serde::Deserialize;

/// One side of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairToken {
    pub address: Address,
    /// ERC-20 decimals, used to scale this token's raw amounts.
    pub decimals: u32,
}

/// Static description of a tracked pair.
///
/// Treated as immutable for the duration of one block; resolved once per
/// call and reused for every conversion inside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairMetadata {
    pub address: Address,
    pub token0: PairToken,
    pub token1: PairToken,
}

/// Resolves contract addresses to tracked pairs.
///
/// `None` means the address is not a tracked pair; its logs are skipped
/// without error.
pub trait PairDirectory {
    fn resolve(&self, address: &Address) -> Option<PairMetadata>;
}

/// In-memory directory backed by a map, for tests and file-fed runs.
#[derive(Debug, Default)]
pub struct MemoryPairDirectory {
    pairs: HashMap<Address, PairMetadata>,
}

impl MemoryPairDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pair: PairMetadata) {
        self.pairs.insert(pair.address, pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PairDirectory for MemoryPairDirectory {
    fn resolve(&self, address: &Address) -> Option<PairMetadata> {
        self.pairs.get(address).cloned()
    }
}
