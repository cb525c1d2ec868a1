//! Decimal math for token amounts and price ratios
//!
//! Everything downstream of the decoders works in arbitrary-precision
//! decimals; raw integer amounts only exist between a log and its decoder.
//! Output fields go through [`decimal_string`] so equal values always print
//! the same way.

use alloy::primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, Zero};

/// Significant digits kept by price-ratio division.
pub const PRICE_PRECISION: u64 = 40;

/// Pair liquidity tokens always carry 18 decimals.
pub const LP_TOKEN_DECIMALS: u32 = 18;

/// Scale a raw integer token amount down by the token's decimal count.
pub fn token_to_decimal(amount: U256, decimals: u32) -> BigDecimal {
    if amount.is_zero() {
        return BigDecimal::zero();
    }
    let unscaled = BigInt::from_bytes_be(Sign::Plus, &amount.to_be_bytes::<32>());
    BigDecimal::new(unscaled, i64::from(decimals)).normalized()
}

/// Quotient of two reserves at [`PRICE_PRECISION`] significant digits.
///
/// A zero on either side yields a plain decimal zero instead of dividing, so
/// ratios over a drained pool print as `"0"`.
pub fn ratio(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if numerator.is_zero() || denominator.is_zero() {
        return BigDecimal::zero();
    }
    (numerator / denominator).with_prec(PRICE_PRECISION).normalized()
}

/// Mean of the present values; zero when none are present.
pub fn average_present(values: &[Option<BigDecimal>]) -> BigDecimal {
    let mut sum = BigDecimal::zero();
    let mut count = 0u32;
    for value in values.iter().flatten() {
        sum = sum + value;
        count += 1;
    }
    if count == 0 {
        return BigDecimal::zero();
    }
    (sum / BigDecimal::from(count)).normalized()
}

/// Canonical plain-decimal rendering for record fields.
pub fn decimal_string(value: &BigDecimal) -> String {
    value.normalized().to_string()
}
