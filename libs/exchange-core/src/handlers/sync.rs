//! Reserve-update handler
//!
//! Every Sync on a tracked pair yields a reserve update, whatever call
//! shape surrounds it:
//!
//! 1. Scale both reserves by their token's decimals
//! 2. token0_price = reserve1 / reserve0 (token0 in units of token1)
//! 3. token1_price = reserve0 / reserve1 (token1 in units of token0)
//! 4. A drained side turns its ratio into a plain "0" instead of dividing

use crate::{
    decimal::{decimal_string, ratio, token_to_decimal},
    events::SyncEvent,
    output::{Record, RecordKind},
};

use super::CallContext;

/// Build a reserve-update record from one Sync event.
pub fn handle(ctx: &CallContext<'_>, sync: &SyncEvent) -> Record {
    let reserve0 = token_to_decimal(sync.reserve0, ctx.pair.token0.decimals);
    let reserve1 = token_to_decimal(sync.reserve1, ctx.pair.token1.decimals);

    let token0_price = ratio(&reserve1, &reserve0);
    let token1_price = ratio(&reserve0, &reserve1);

    ctx.record(
        sync.ordinal,
        RecordKind::ReserveUpdate {
            reserve0: decimal_string(&reserve0),
            reserve1: decimal_string(&reserve1),
            token0_price: decimal_string(&token0_price),
            token1_price: decimal_string(&token1_price),
        },
    )
}
