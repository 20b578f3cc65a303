use {
    crate::error::PriceError,
    cosmwasm_std::{Decimal, Uint128},
};

/// Price of a fee token relative to the native token, given both tokens' TWAPs
/// against a common quote asset.
///
/// The result is the number of fee token units that one native token unit is
/// worth.
pub fn calculate_token_price(base: Decimal, token: Decimal) -> Result<Decimal, PriceError> {
    if base.is_zero() || token.is_zero() {
        return Err(PriceError::ZeroPrice);
    }

    token.checked_div(base).map_err(Into::into)
}

/// Ensure `new_price` is within ±`clamp_factor` of `prev_price`.
///
/// If there is no previous price, or clamping is disabled (factor of zero), the
/// new price is returned unmodified.
pub fn clamp_price(prev_price: Decimal, new_price: Decimal, clamp_factor: Decimal) -> Decimal {
    if prev_price.is_zero() || clamp_factor.is_zero() {
        return new_price;
    }

    let min = prev_price.saturating_mul(Decimal::one().saturating_sub(clamp_factor));
    let max = prev_price.saturating_mul(Decimal::one().saturating_add(clamp_factor));

    new_price.clamp(min, max)
}

/// Convert an amount of the native token into the equivalent amount of a fee
/// token, truncating the fractional part.
pub fn convert_amount(native_amount: Uint128, price: Decimal) -> Result<Uint128, PriceError> {
    native_amount.checked_mul_floor(price).map_err(Into::into)
}

// ----------------------------------- Tests -----------------------------------
