mod cosmos;
pub mod error;
mod evm;
mod fee_checker;
mod handler;
mod tx;

pub use crate::{
    cosmos::DeductFeeDecorator,
    error::{Error, Result},
    evm::{verify_account_balance, verify_if_account_exists, EvmConfig, MonoDecorator},
    fee_checker::{GasPrice, MinGasPriceChecker, TxFeeChecker},
    handler::{AnteHandler, AnteResponse},
    tx::{CosmosTx, EthTxType, EthereumMsg, EthereumTx, Tx},
};

#[cfg(test)]
mod testing;
