//! Mint handler
//!
//! 1. Liquidity = LP tokens minted to the depositor, always 18 decimals
//! 2. amount0 / amount1 from the Mint event, scaled per token
//! 3. Reserves after come from the pattern's Sync; before backs the deposit
//!    out again (saturating, so inconsistent data clamps at zero)
//! 4. The 4-log shape adds the protocol-fee mint (fee_to, fee_liquidity)

use crate::{
    classify::MintAction,
    decimal::{decimal_string, token_to_decimal, LP_TOKEN_DECIMALS},
    output::{Record, RecordKind},
    utils,
};

use super::CallContext;

/// Build a mint record from a recognized mint pattern.
pub fn handle(ctx: &CallContext<'_>, action: &MintAction) -> Record {
    let mint = &action.mint;

    let liquidity = token_to_decimal(action.liquidity(), LP_TOKEN_DECIMALS);
    let amount0 = token_to_decimal(mint.amount0, ctx.pair.token0.decimals);
    let amount1 = token_to_decimal(mint.amount1, ctx.pair.token1.decimals);

    let reserve0_after = token_to_decimal(action.sync.reserve0, ctx.pair.token0.decimals);
    let reserve1_after = token_to_decimal(action.sync.reserve1, ctx.pair.token1.decimals);
    let reserve0_before = token_to_decimal(
        action.sync.reserve0.saturating_sub(mint.amount0),
        ctx.pair.token0.decimals,
    );
    let reserve1_before = token_to_decimal(
        action.sync.reserve1.saturating_sub(mint.amount1),
        ctx.pair.token1.decimals,
    );

    let (fee_to, fee_liquidity) = match &action.fee_transfer {
        Some(fee) => (
            Some(utils::address_hex(&fee.to)),
            Some(decimal_string(&token_to_decimal(fee.value, LP_TOKEN_DECIMALS))),
        ),
        None => (None, None),
    };

    ctx.record(
        mint.ordinal,
        RecordKind::Mint {
            sender: utils::address_hex(&mint.sender),
            to: utils::address_hex(&action.liquidity_transfer.to),
            liquidity: decimal_string(&liquidity),
            amount0: decimal_string(&amount0),
            amount1: decimal_string(&amount1),
            reserve0_before: decimal_string(&reserve0_before),
            reserve1_before: decimal_string(&reserve1_before),
            reserve0_after: decimal_string(&reserve0_after),
            reserve1_after: decimal_string(&reserve1_after),
            fee_to,
            fee_liquidity,
        },
    )
}
