use {
    cosmwasm_std::{Addr, Binary, Coin, Decimal, StdError, StdResult, Storage, Uint128},
    cw_storage_plus::{Item, Map},
    feeabs::{
        AccountKeeper, BankKeeper, BaseAccount, Erc20Keeper, FeeMarketKeeper, FeegrantKeeper,
        OracleKeeper, OracleTwap, TokenPair,
    },
    sha2::{Digest, Sha256},
};

/// Module accounts are addressed by their name
pub fn module_address(module: &str) -> Addr {
    Addr::unchecked(module)
}

// ----------------------------------- bank ------------------------------------

// (address, denom) => amount
const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("mock_bank/balances");

pub struct MockBank;

impl MockBank {
    pub fn fund(store: &mut dyn Storage, address: &Addr, coins: &[Coin]) -> StdResult<()> {
        for coin in coins {
            increase_balance(store, address, coin)?;
        }
        Ok(())
    }

    pub fn balance_of(store: &dyn Storage, address: &Addr, denom: &str) -> Uint128 {
        BALANCES.may_load(store, (address, denom)).ok().flatten().unwrap_or_default()
    }
}

impl BankKeeper for MockBank {
    fn balance(&self, store: &dyn Storage, address: &Addr, denom: &str) -> StdResult<Coin> {
        let amount = BALANCES.may_load(store, (address, denom))?.unwrap_or_default();
        Ok(Coin::new(amount.u128(), denom))
    }

    fn send_coins(
        &self,
        store:  &mut dyn Storage,
        from:   &Addr,
        to:     &Addr,
        amount: &[Coin],
    ) -> StdResult<()> {
        for coin in amount {
            decrease_balance(store, from, coin)?;
            increase_balance(store, to, coin)?;
        }
        Ok(())
    }

    fn send_coins_from_account_to_module(
        &self,
        store:  &mut dyn Storage,
        from:   &Addr,
        module: &str,
        amount: &[Coin],
    ) -> StdResult<()> {
        self.send_coins(store, from, &module_address(module), amount)
    }
}

fn increase_balance(store: &mut dyn Storage, address: &Addr, coin: &Coin) -> StdResult<()> {
    BALANCES.update(store, (address, &coin.denom), |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(coin.amount)?)
    })?;
    Ok(())
}

fn decrease_balance(store: &mut dyn Storage, address: &Addr, coin: &Coin) -> StdResult<()> {
    let balance = BALANCES.may_load(store, (address, &coin.denom))?.unwrap_or_default();
    let Ok(remaining) = balance.checked_sub(coin.amount) else {
        return Err(StdError::generic_err(format!(
            "insufficient funds: {balance}{denom} is smaller than {amount}{denom}",
            denom = coin.denom,
            amount = coin.amount,
        )));
    };
    BALANCES.save(store, (address, &coin.denom), &remaining)
}

// ----------------------------------- erc20 -----------------------------------

// denom => token pair
const PAIRS: Map<&str, TokenPair> = Map::new("mock_erc20/pairs");

// erc20 contract => denom
const PAIR_DENOMS: Map<&str, String> = Map::new("mock_erc20/pair_denoms");

// (erc20 contract, account) => amount
const ERC20_BALANCES: Map<(&str, &Addr), Uint128> = Map::new("mock_erc20/balances");

pub struct MockErc20;

impl MockErc20 {
    /// Register an ERC-20 contract for the denom. The contract address is
    /// derived from the denom, so the same denom always maps to the same
    /// contract.
    pub fn register_pair(store: &mut dyn Storage, denom: &str) -> StdResult<TokenPair> {
        let pair = TokenPair {
            denom:          denom.into(),
            erc20_contract: erc20_address(denom),
            enabled:        true,
        };
        PAIRS.save(store, denom, &pair)?;
        PAIR_DENOMS.save(store, &pair.erc20_contract, &pair.denom)?;
        Ok(pair)
    }

    pub fn mint(
        store:          &mut dyn Storage,
        erc20_contract: &str,
        account:        &Addr,
        amount:         Uint128,
    ) -> StdResult<()> {
        ERC20_BALANCES.update(store, (erc20_contract, account), |balance| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        })?;
        Ok(())
    }
}

impl Erc20Keeper for MockErc20 {
    fn token_pair(&self, store: &dyn Storage, denom: &str) -> StdResult<Option<TokenPair>> {
        PAIRS.may_load(store, denom)
    }

    fn balance_of(&self, store: &dyn Storage, erc20_contract: &str, account: &Addr) -> StdResult<Uint128> {
        Ok(ERC20_BALANCES.may_load(store, (erc20_contract, account))?.unwrap_or_default())
    }

    fn convert_erc20(
        &self,
        store:          &mut dyn Storage,
        amount:         Uint128,
        account:        &Addr,
        erc20_contract: &str,
    ) -> StdResult<()> {
        let denom = PAIR_DENOMS.load(store, erc20_contract)?;

        let balance = self.balance_of(store, erc20_contract, account)?;
        let Ok(remaining) = balance.checked_sub(amount) else {
            return Err(StdError::generic_err(format!(
                "erc20 balance of {account} is smaller than {amount}: {balance}",
            )));
        };
        ERC20_BALANCES.save(store, (erc20_contract, account), &remaining)?;

        increase_balance(store, account, &Coin {
            denom,
            amount,
        })
    }
}

/// Mimic an EVM address: the first 20 bytes of sha256(denom), hex-encoded
fn erc20_address(denom: &str) -> String {
    let hash = Sha256::digest(denom.as_bytes());
    let hex = hash[..20].iter().map(|byte| format!("{byte:02x}")).collect::<String>();
    format!("0x{hex}")
}

// ---------------------------------- oracle -----------------------------------

const TWAPS: Item<Vec<(String, Decimal)>> = Item::new("mock_oracle/twaps");

const VOTE_TARGETS: Item<Vec<String>> = Item::new("mock_oracle/vote_targets");

const UNAVAILABLE: Item<bool> = Item::new("mock_oracle/unavailable");

pub struct MockOracle;

impl MockOracle {
    /// Longest lookback the mock oracle keeps price history for
    pub const MAX_LOOKBACK_SECONDS: u64 = 3600;

    pub fn set_twaps(store: &mut dyn Storage, twaps: &[(&str, Decimal)]) -> StdResult<()> {
        let twaps = twaps.iter().map(|(denom, twap)| (denom.to_string(), *twap)).collect();
        TWAPS.save(store, &twaps)
    }

    pub fn set_vote_targets(store: &mut dyn Storage, denoms: &[&str]) -> StdResult<()> {
        VOTE_TARGETS.save(store, &denoms.iter().map(ToString::to_string).collect())
    }

    /// Make every TWAP query fail, as if the oracle has no price history
    pub fn set_unavailable(store: &mut dyn Storage, unavailable: bool) -> StdResult<()> {
        UNAVAILABLE.save(store, &unavailable)
    }
}

impl OracleKeeper for MockOracle {
    fn calculate_twaps(&self, store: &dyn Storage, lookback_seconds: u64) -> StdResult<Vec<OracleTwap>> {
        if UNAVAILABLE.may_load(store)?.unwrap_or(false) {
            return Err(StdError::generic_err("no price snapshots available for the lookback window"));
        }

        self.validate_lookback_seconds(store, lookback_seconds)?;

        Ok(TWAPS
            .may_load(store)?
            .unwrap_or_default()
            .into_iter()
            .map(|(denom, twap)| OracleTwap {
                denom,
                twap,
                lookback_seconds,
            })
            .collect())
    }

    fn validate_lookback_seconds(&self, _store: &dyn Storage, lookback_seconds: u64) -> StdResult<()> {
        if lookback_seconds == 0 || lookback_seconds > Self::MAX_LOOKBACK_SECONDS {
            return Err(StdError::generic_err(
                "twap lookback seconds is greater than max lookback duration or less than or equal to 0",
            ));
        }
        Ok(())
    }

    fn vote_targets(&self, store: &dyn Storage) -> StdResult<Vec<String>> {
        Ok(VOTE_TARGETS.may_load(store)?.unwrap_or_default())
    }
}

// --------------------------------- feegrant ----------------------------------

// (granter, grantee) => remaining spend limit
const ALLOWANCES: Map<(&Addr, &Addr), Vec<Coin>> = Map::new("mock_feegrant/allowances");

pub struct MockFeegrant;

impl MockFeegrant {
    pub fn grant(
        store:       &mut dyn Storage,
        granter:     &Addr,
        grantee:     &Addr,
        spend_limit: Vec<Coin>,
    ) -> StdResult<()> {
        ALLOWANCES.save(store, (granter, grantee), &spend_limit)
    }
}

impl FeegrantKeeper for MockFeegrant {
    fn use_granted_fees(
        &self,
        store:   &mut dyn Storage,
        granter: &Addr,
        grantee: &Addr,
        fee:     &[Coin],
        _msgs:   &[Binary],
    ) -> StdResult<()> {
        let Some(mut spend_limit) = ALLOWANCES.may_load(store, (granter, grantee))? else {
            return Err(StdError::generic_err("fee-grant not found"));
        };

        for coin in fee {
            let Some(limit) = spend_limit.iter_mut().find(|limit| limit.denom == coin.denom) else {
                return Err(StdError::generic_err(format!("fee limit does not cover {}", coin.denom)));
            };
            limit.amount = limit
                .amount
                .checked_sub(coin.amount)
                .map_err(|_| StdError::generic_err("basic allowance: fee limit exceeded"))?;
        }

        ALLOWANCES.save(store, (granter, grantee), &spend_limit)
    }
}

// ---------------------------------- account ----------------------------------

const ACCOUNTS: Map<&Addr, BaseAccount> = Map::new("mock_auth/accounts");

const MODULE_ACCOUNTS: Map<&str, Addr> = Map::new("mock_auth/modules");

pub struct MockAccounts;

impl MockAccounts {
    pub fn register_module(store: &mut dyn Storage, module: &str) -> StdResult<()> {
        MODULE_ACCOUNTS.save(store, module, &module_address(module))
    }

    pub fn create(store: &mut dyn Storage, address: &Addr) -> StdResult<BaseAccount> {
        let account = BaseAccount::new(address.clone());
        ACCOUNTS.save(store, address, &account)?;
        Ok(account)
    }

    /// Deploy bytecode at the address, turning it into a contract account
    pub fn create_contract(store: &mut dyn Storage, address: &Addr) -> StdResult<BaseAccount> {
        let account = BaseAccount {
            code_hash: Some(Binary::from(Sha256::digest(address.as_bytes()).to_vec())),
            ..BaseAccount::new(address.clone())
        };
        ACCOUNTS.save(store, address, &account)?;
        Ok(account)
    }
}

impl AccountKeeper for MockAccounts {
    fn account(&self, store: &dyn Storage, address: &Addr) -> StdResult<Option<BaseAccount>> {
        ACCOUNTS.may_load(store, address)
    }

    fn new_account_with_address(&self, _store: &dyn Storage, address: &Addr) -> StdResult<BaseAccount> {
        Ok(BaseAccount::new(address.clone()))
    }

    fn set_account(&self, store: &mut dyn Storage, account: &BaseAccount) -> StdResult<()> {
        ACCOUNTS.save(store, &account.address, account)
    }

    fn module_address(&self, store: &dyn Storage, module: &str) -> Option<Addr> {
        MODULE_ACCOUNTS.may_load(store, module).ok().flatten()
    }
}

// -------------------------------- fee market ---------------------------------

const BASE_FEE: Item<Uint128> = Item::new("mock_feemarket/base_fee");

const MIN_GAS_PRICE: Item<Decimal> = Item::new("mock_feemarket/min_gas_price");

pub struct MockFeeMarket;

impl MockFeeMarket {
    pub fn set_base_fee(store: &mut dyn Storage, base_fee: Uint128) -> StdResult<()> {
        BASE_FEE.save(store, &base_fee)
    }

    pub fn set_min_gas_price(store: &mut dyn Storage, min_gas_price: Decimal) -> StdResult<()> {
        MIN_GAS_PRICE.save(store, &min_gas_price)
    }
}

impl FeeMarketKeeper for MockFeeMarket {
    fn base_fee(&self, store: &dyn Storage) -> StdResult<Option<Uint128>> {
        BASE_FEE.may_load(store)
    }

    fn min_gas_price(&self, store: &dyn Storage) -> StdResult<Decimal> {
        Ok(MIN_GAS_PRICE.may_load(store)?.unwrap_or_default())
    }
}

// ----------------------------------- Tests -----------------------------------
