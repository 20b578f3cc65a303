//! Interfaces of the modules the fee abstraction keeper and the ante handlers
//! depend on.
//!
//! Collaborators keep their state in the same store the caller passes in, so
//! that whatever they write is subject to the same commit-or-discard branch as
//! the rest of the transaction's admission.

use {
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{Addr, Binary, Coin, Decimal, StdResult, Storage, Uint128},
};

// ---------------------------------- oracle -----------------------------------

/// Time-weighted average price of one oracle denom over a lookback window
#[cw_serde]
pub struct OracleTwap {
    pub denom:            String,
    pub twap:             Decimal,
    pub lookback_seconds: u64,
}

pub trait OracleKeeper {
    fn calculate_twaps(&self, store: &dyn Storage, lookback_seconds: u64) -> StdResult<Vec<OracleTwap>>;

    /// Error if the lookback exceeds what the oracle keeps price history for
    fn validate_lookback_seconds(&self, store: &dyn Storage, lookback_seconds: u64) -> StdResult<()>;

    /// Denoms the oracle's validators currently vote prices for
    fn vote_targets(&self, store: &dyn Storage) -> StdResult<Vec<String>>;
}

// ----------------------------------- bank ------------------------------------

pub trait BankKeeper {
    fn balance(&self, store: &dyn Storage, address: &Addr, denom: &str) -> StdResult<Coin>;

    fn send_coins(
        &self,
        store:  &mut dyn Storage,
        from:   &Addr,
        to:     &Addr,
        amount: &[Coin],
    ) -> StdResult<()>;

    fn send_coins_from_account_to_module(
        &self,
        store:  &mut dyn Storage,
        from:   &Addr,
        module: &str,
        amount: &[Coin],
    ) -> StdResult<()>;
}

// ----------------------------------- erc20 -----------------------------------

/// A bank denom and the ERC-20 contract mirroring it
#[cw_serde]
pub struct TokenPair {
    pub denom:          String,
    pub erc20_contract: String,
    pub enabled:        bool,
}

pub trait Erc20Keeper {
    fn token_pair(&self, store: &dyn Storage, denom: &str) -> StdResult<Option<TokenPair>>;

    fn balance_of(&self, store: &dyn Storage, erc20_contract: &str, account: &Addr) -> StdResult<Uint128>;

    /// Move `amount` out of the account's ERC-20 balance and into its liquid
    /// bank balance of the paired denom
    fn convert_erc20(
        &self,
        store:          &mut dyn Storage,
        amount:         Uint128,
        account:        &Addr,
        erc20_contract: &str,
    ) -> StdResult<()>;
}

// --------------------------------- feegrant ----------------------------------

pub trait FeegrantKeeper {
    fn use_granted_fees(
        &self,
        store:   &mut dyn Storage,
        granter: &Addr,
        grantee: &Addr,
        fee:     &[Coin],
        msgs:    &[Binary],
    ) -> StdResult<()>;
}

// ---------------------------------- account ----------------------------------

#[cw_serde]
pub struct BaseAccount {
    pub address:   Addr,
    pub sequence:  u64,
    /// Hash of the EVM bytecode deployed at this address, if any
    pub code_hash: Option<Binary>,
}

impl BaseAccount {
    pub fn new(address: Addr) -> Self {
        Self {
            address,
            sequence: 0,
            code_hash: None,
        }
    }

    /// Accounts holding code are contracts, not externally-owned accounts
    pub fn is_contract(&self) -> bool {
        self.code_hash.as_ref().map_or(false, |hash| !hash.is_empty())
    }
}

pub trait AccountKeeper {
    fn account(&self, store: &dyn Storage, address: &Addr) -> StdResult<Option<BaseAccount>>;

    fn new_account_with_address(&self, store: &dyn Storage, address: &Addr) -> StdResult<BaseAccount>;

    fn set_account(&self, store: &mut dyn Storage, account: &BaseAccount) -> StdResult<()>;

    fn module_address(&self, store: &dyn Storage, module: &str) -> Option<Addr>;
}

// -------------------------------- fee market ---------------------------------

pub trait FeeMarketKeeper {
    /// EIP-1559 base fee per gas; None before London
    fn base_fee(&self, store: &dyn Storage) -> StdResult<Option<Uint128>>;

    /// Chain-wide minimum gas price, enforced in every mode
    fn min_gas_price(&self, store: &dyn Storage) -> StdResult<Decimal>;
}
