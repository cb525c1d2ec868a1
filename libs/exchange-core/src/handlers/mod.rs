//! Record computation for classified call actions
//!
//! Each handler turns one canonical action into an output record:
//! - sync: reserve updates with cross-token price ratios
//! - swap: decimal trade amounts plus tracked-value averaging
//! - mint / burn: liquidity amounts with reserve enrichment

pub mod burn;
pub mod mint;
pub mod swap;
pub mod sync;

use crate::{
    output::{Record, RecordKind},
    pair::PairMetadata,
    utils,
};

/// Context shared by every handler invocation within one call.
pub struct CallContext<'a> {
    pub pair: &'a PairMetadata,
    /// Hash of the enclosing transaction, lowercase hex.
    pub transaction_id: &'a str,
    /// Sender of the enclosing transaction, lowercase hex.
    pub transaction_from: &'a str,
    pub block_timestamp: u64,
}

impl CallContext<'_> {
    /// Stamp a computed payload with the pair and source-log metadata.
    pub fn record(&self, log_ordinal: u64, kind: RecordKind) -> Record {
        Record {
            pair_address: utils::address_hex(&self.pair.address),
            token0_address: utils::address_hex(&self.pair.token0.address),
            token1_address: utils::address_hex(&self.pair.token1.address),
            transaction_id: self.transaction_id.to_string(),
            block_timestamp: self.block_timestamp,
            log_ordinal,
            kind,
        }
    }
}
