use {
    crate::{denom::validate_denom, error::ValidationError},
    cosmwasm_schema::cw_serde,
    cosmwasm_std::Decimal,
};

#[cw_serde]
pub struct Params {
    /// The chain's staking token; fees are requested in this denom
    pub native_denom: String,

    /// The identifier of the native token in the price oracle
    pub native_oracle_denom: String,

    /// Maximum fractional movement of a fee token's price in a single refresh.
    /// Zero disables clamping.
    pub clamp_factor: Decimal,

    /// Price of the native token used when the oracle has no TWAP for it
    pub fallback_native_price: Decimal,

    /// Lookback window, in seconds, of the TWAPs the prices are computed from
    pub twap_lookback_window: u64,

    /// Module kill switch. When false, fees are passed through unconverted and
    /// prices are not refreshed.
    pub enabled: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            native_denom:          Self::DEFAULT_NATIVE_DENOM.into(),
            native_oracle_denom:   Self::DEFAULT_NATIVE_ORACLE_DENOM.into(),
            clamp_factor:          Decimal::percent(10),
            fallback_native_price: Decimal::one(),
            twap_lookback_window:  Self::DEFAULT_TWAP_LOOKBACK_WINDOW,
            enabled:               true,
        }
    }
}

impl Params {
    pub const DEFAULT_NATIVE_DENOM: &'static str = "akii";
    pub const DEFAULT_NATIVE_ORACLE_DENOM: &'static str = "kii";
    pub const DEFAULT_TWAP_LOOKBACK_WINDOW: u64 = 900;

    /// Stateless validation. The lookback window's upper bound is owned by the
    /// oracle, and is checked by the keeper on update.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if validate_denom(&self.native_denom).is_err() {
            return Err(invalid("native denom is invalid"));
        }

        if validate_denom(&self.native_oracle_denom).is_err() {
            return Err(invalid("native oracle denom is invalid"));
        }

        if self.clamp_factor > Decimal::one() {
            return Err(invalid("clamp factor must be between 0 and 1"));
        }

        if self.fallback_native_price.is_zero() {
            return Err(invalid("fallback native price must be greater than 0"));
        }

        if self.twap_lookback_window == 0 {
            return Err(invalid("twap lookback window must be greater than 0"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> ValidationError {
    ValidationError::InvalidParams {
        reason: reason.into(),
    }
}

// ----------------------------------- Tests -----------------------------------
