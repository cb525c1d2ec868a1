//! Point-in-time token prices
//!
//! Swap valuation reads unit prices keyed by (token, reference currency),
//! as of the swap's log ordinal. The store is written upstream; the core
//! only performs as-of reads.

use std::collections::{BTreeMap, HashMap};

use alloy::primitives::Address;
use bigdecimal::BigDecimal;
use serde::Deserialize;

/// Reference currencies tracked values are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// The chain's native coin.
    Native,
    /// The USD stablecoin the deployment tracks.
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Native => "native",
            Currency::Usd => "usd",
        }
    }
}

/// As-of reads of token unit prices.
///
/// `get_at` returns the most recent price recorded at or before `ordinal`,
/// or `None` when the token has no recorded price in that currency yet.
pub trait PriceStore {
    fn get_at(&self, ordinal: u64, token: &Address, currency: Currency) -> Option<BigDecimal>;
}

/// In-memory ordinal-versioned price store, for tests and file-fed runs.
#[derive(Debug, Default)]
pub struct MemoryPriceStore {
    prices: HashMap<(Address, Currency), BTreeMap<u64, BigDecimal>>,
}

impl MemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `price` for `token` in `currency` as of `ordinal`.
    pub fn set(&mut self, ordinal: u64, token: Address, currency: Currency, price: BigDecimal) {
        self.prices
            .entry((token, currency))
            .or_default()
            .insert(ordinal, price);
    }
}

impl PriceStore for MemoryPriceStore {
    fn get_at(&self, ordinal: u64, token: &Address, currency: Currency) -> Option<BigDecimal> {
        let versions = self.prices.get(&(*token, currency))?;
        versions
            .range(..=ordinal)
            .next_back()
            .map(|(_, price)| price.clone())
    }
}
