//! Swap handler
//!
//! 1. Scale each side's in/out amounts by that token's decimals
//! 2. amount_total per side = in + out
//! 3. Price each side in each reference currency as of the swap's ordinal
//! 4. Tracked value per currency = mean of the sides that have a price; a
//!    side with no recorded price drops out of the mean entirely

use alloy::primitives::Address;
use bigdecimal::{BigDecimal, Zero};

use crate::{
    classify::SwapAction,
    decimal::{average_present, decimal_string, token_to_decimal},
    output::{Record, RecordKind},
    prices::{Currency, PriceStore},
    utils,
};

use super::CallContext;

/// Build a swap record, valuing both sides in both reference currencies.
pub fn handle<S: PriceStore>(ctx: &CallContext<'_>, action: &SwapAction, prices: &S) -> Record {
    let swap = &action.swap;

    let amount0_in = token_to_decimal(swap.amount0_in, ctx.pair.token0.decimals);
    let amount1_in = token_to_decimal(swap.amount1_in, ctx.pair.token1.decimals);
    let amount0_out = token_to_decimal(swap.amount0_out, ctx.pair.token0.decimals);
    let amount1_out = token_to_decimal(swap.amount1_out, ctx.pair.token1.decimals);

    let amount0_total = &amount0_in + &amount0_out;
    let amount1_total = &amount1_in + &amount1_out;

    let amount_native = tracked_value(
        ctx,
        prices,
        swap.ordinal,
        Currency::Native,
        &amount0_total,
        &amount1_total,
    );
    let amount_usd = tracked_value(
        ctx,
        prices,
        swap.ordinal,
        Currency::Usd,
        &amount0_total,
        &amount1_total,
    );

    ctx.record(
        swap.ordinal,
        RecordKind::Swap {
            sender: utils::address_hex(&swap.sender),
            from: ctx.transaction_from.to_string(),
            to: utils::address_hex(&swap.to),
            amount0_in: decimal_string(&amount0_in),
            amount1_in: decimal_string(&amount1_in),
            amount0_out: decimal_string(&amount0_out),
            amount1_out: decimal_string(&amount1_out),
            amount_native: decimal_string(&amount_native),
            amount_usd: decimal_string(&amount_usd),
        },
    )
}

/// Mean of both sides' values in `currency`; sides without a price drop out.
fn tracked_value<S: PriceStore>(
    ctx: &CallContext<'_>,
    prices: &S,
    ordinal: u64,
    currency: Currency,
    amount0_total: &BigDecimal,
    amount1_total: &BigDecimal,
) -> BigDecimal {
    let side0 = side_value(prices, ordinal, &ctx.pair.token0.address, currency, amount0_total);
    let side1 = side_value(prices, ordinal, &ctx.pair.token1.address, currency, amount1_total);
    average_present(&[side0, side1])
}

/// `amount_total × unit price`, or `None` when no usable price is recorded.
///
/// A recorded zero price counts as absent; it carries no information and
/// must not pull the mean toward zero.
fn side_value<S: PriceStore>(
    prices: &S,
    ordinal: u64,
    token: &Address,
    currency: Currency,
    amount_total: &BigDecimal,
) -> Option<BigDecimal> {
    let price = prices.get_at(ordinal, token, currency)?;
    if price.is_zero() {
        return None;
    }
    Some(amount_total * &price)
}
