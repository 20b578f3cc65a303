use cosmwasm_std::{CheckedFromRatioError, CheckedMultiplyFractionError};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid denom `{denom}`")]
    InvalidDenom {
        denom: String,
    },

    #[error("invalid coins: {reason}")]
    InvalidCoins {
        reason: String,
    },

    #[error("invalid fee abstraction params: {reason}")]
    InvalidParams {
        reason: String,
    },

    #[error("invalid fee token metadata: {reason}")]
    InvalidFeeTokenMetadata {
        reason: String,
    },
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error(transparent)]
    Ratio(#[from] CheckedFromRatioError),

    #[error(transparent)]
    MultiplyFraction(#[from] CheckedMultiplyFractionError),

    #[error("invalid input: base or token price is zero")]
    ZeroPrice,
}
