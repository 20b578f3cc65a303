use {
    cosmwasm_std::{Coin, OverflowError, StdError, Uint128},
    feeabs::{PriceError, ValidationError},
};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("invalid fee: {reason}")]
    InvalidFee {
        reason: String,
    },

    #[error("insufficient funds for fee `{required}`, no fee token could cover it; attempted: {attempted:?}")]
    InsufficientFunds {
        required:  Coin,
        attempted: Vec<String>,
    },

    #[error("failed to unwrap {amount}{denom} for `{account}`: {source}")]
    Unwrap {
        account: String,
        denom:   String,
        amount:  Uint128,
        source:  StdError,
    },

    #[error("unauthorized: expecting `{expected}`, found `{actual}`")]
    Unauthorized {
        expected: String,
        actual:   String,
    },

    #[error("oracle denom `{denom}` is not a vote target of the oracle")]
    NotVoteTarget {
        denom: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
