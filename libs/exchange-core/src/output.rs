//! Output records
//!
//! Terminal artifacts of extraction. Every numeric field is an exact decimal
//! string; nothing downstream should ever see binary floating point.

use serde::Serialize;

/// One extracted record, stamped with its pair and source log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub pair_address: String,
    pub token0_address: String,
    pub token1_address: String,
    pub transaction_id: String,
    pub block_timestamp: u64,
    /// Ordinal of the log the record was computed from.
    pub log_ordinal: u64,
    #[serde(flatten)]
    pub kind: RecordKind,
}

/// Kind-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    ReserveUpdate {
        reserve0: String,
        reserve1: String,
        /// Units of token1 per token0 (reserve1 / reserve0).
        token0_price: String,
        /// Units of token0 per token1 (reserve0 / reserve1).
        token1_price: String,
    },
    Mint {
        sender: String,
        /// Recipient of the minted LP tokens.
        to: String,
        liquidity: String,
        amount0: String,
        amount1: String,
        reserve0_before: String,
        reserve1_before: String,
        reserve0_after: String,
        reserve1_after: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fee_to: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fee_liquidity: Option<String>,
    },
    Burn {
        sender: String,
        /// Recipient of the withdrawn tokens.
        to: String,
        liquidity: String,
        amount0: String,
        amount1: String,
        reserve0_before: String,
        reserve1_before: String,
        reserve0_after: String,
        reserve1_after: String,
    },
    Swap {
        sender: String,
        /// Sender of the enclosing transaction.
        from: String,
        to: String,
        amount0_in: String,
        amount1_in: String,
        amount0_out: String,
        amount1_out: String,
        /// Trade value in the native coin; "0" when no side has a price.
        amount_native: String,
        /// Trade value in USD; "0" when no side has a price.
        amount_usd: String,
    },
}

impl Record {
    /// Snake-case name of the record kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            RecordKind::ReserveUpdate { .. } => "reserve_update",
            RecordKind::Mint { .. } => "mint",
            RecordKind::Burn { .. } => "burn",
            RecordKind::Swap { .. } => "swap",
        }
    }
}
