use cosmwasm_std::{CheckedMultiplyFractionError, OverflowError, StdError, Uint128};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    MultiplyFraction(#[from] CheckedMultiplyFractionError),

    #[error(transparent)]
    FeeAbs(#[from] feeabs_module::Error),

    #[error("must provide positive gas")]
    ZeroGas,

    #[error("fee collector module account ({module}) has not been set")]
    FeeCollectorNotSet {
        module: String,
    },

    #[error("fee grants are not enabled")]
    FeeGrantsDisabled,

    #[error("{granter} does not allow to pay fees for {grantee}: {source}")]
    FeeGrantDenied {
        granter: String,
        grantee: String,
        source:  StdError,
    },

    #[error("account `{address}` does not exist")]
    UnknownAddress {
        address: String,
    },

    #[error("insufficient fee; got: `{provided}` required: `{required}`")]
    InsufficientFee {
        required: String,
        provided: String,
    },

    #[error("expecting exactly one ethereum message, found {count}")]
    InvalidMsgCount {
        count: usize,
    },

    #[error("the sender is not EOA: address `{address}`")]
    SenderNotEoa {
        address: String,
    },

    #[error("sender balance < tx value ({balance} < {value})")]
    InsufficientBalanceForValue {
        balance: Uint128,
        value:   Uint128,
    },

    #[error("invalid nonce; got {got}, expected {expected}")]
    InvalidNonce {
        expected: u64,
        got:      u64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
