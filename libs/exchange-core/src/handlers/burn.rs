//! Burn handler
//!
//! 1. Liquidity = LP tokens burned, always 18 decimals
//! 2. amount0 / amount1 from the Burn event, scaled per token
//! 3. Reserves after come from the pattern's Sync; before adds the
//!    withdrawal back in
//! 4. `to` is the Burn event's recipient of the withdrawn tokens

use crate::{
    classify::BurnAction,
    decimal::{decimal_string, token_to_decimal, LP_TOKEN_DECIMALS},
    output::{Record, RecordKind},
    utils,
};

use super::CallContext;

/// Build a burn record from a recognized burn pattern.
pub fn handle(ctx: &CallContext<'_>, action: &BurnAction) -> Record {
    let burn = &action.burn;

    let liquidity = token_to_decimal(action.liquidity(), LP_TOKEN_DECIMALS);
    let amount0 = token_to_decimal(burn.amount0, ctx.pair.token0.decimals);
    let amount1 = token_to_decimal(burn.amount1, ctx.pair.token1.decimals);

    let reserve0_after = token_to_decimal(action.sync.reserve0, ctx.pair.token0.decimals);
    let reserve1_after = token_to_decimal(action.sync.reserve1, ctx.pair.token1.decimals);
    let reserve0_before = token_to_decimal(
        action.sync.reserve0.saturating_add(burn.amount0),
        ctx.pair.token0.decimals,
    );
    let reserve1_before = token_to_decimal(
        action.sync.reserve1.saturating_add(burn.amount1),
        ctx.pair.token1.decimals,
    );

    ctx.record(
        burn.ordinal,
        RecordKind::Burn {
            sender: utils::address_hex(&burn.sender),
            to: utils::address_hex(&burn.to),
            liquidity: decimal_string(&liquidity),
            amount0: decimal_string(&amount0),
            amount1: decimal_string(&amount1),
            reserve0_before: decimal_string(&reserve0_before),
            reserve1_before: decimal_string(&reserve1_before),
            reserve0_after: decimal_string(&reserve0_after),
            reserve1_after: decimal_string(&reserve1_after),
        },
    )
}
