use {
    crate::{
        cosmos::DeductFeeDecorator,
        evm::{EvmConfig, MonoDecorator},
        fee_checker::{GasPrice, MinGasPriceChecker},
        tx::{CosmosTx, EthTxType, EthereumMsg},
    },
    cosmwasm_std::{Addr, Coin, Decimal, Storage, Uint128},
    feeabs::{FeeTokenMetadata, GenesisState, Params, FEE_COLLECTOR_NAME},
    feeabs_mocks::{MockAccounts, MockBank, MockErc20, MockFeeMarket, MockFeegrant, MockOracle},
    feeabs_module::Keeper,
};

pub const AUTHORITY: &str = "gov";

pub const PAYER: &str = "payer";

pub fn mock_keeper() -> Keeper<'static> {
    Keeper::new(Addr::unchecked(AUTHORITY), &MockBank, &MockErc20, &MockOracle)
}

/// Genesis with default params and the given fee tokens, a fee collector,
/// and an account for the payer.
pub fn setup(store: &mut dyn Storage, fee_tokens: Vec<FeeTokenMetadata>) {
    init(store, fee_tokens);
    MockAccounts::register_module(store, FEE_COLLECTOR_NAME).unwrap();
}

pub fn setup_without_fee_collector(store: &mut dyn Storage) {
    init(store, vec![]);
}

fn init(store: &mut dyn Storage, fee_tokens: Vec<FeeTokenMetadata>) {
    let vote_targets = fee_tokens.iter().map(|token| token.oracle_denom.as_str()).collect::<Vec<_>>();
    MockOracle::set_vote_targets(store, &vote_targets).unwrap();

    mock_keeper()
        .init_genesis(store, &GenesisState {
            params:     Params::default(),
            fee_tokens: fee_tokens.into(),
        })
        .unwrap();

    MockAccounts::create(store, &Addr::unchecked(PAYER)).unwrap();
}

pub fn mock_cosmos_tx(fee: Vec<Coin>, gas: u64) -> CosmosTx {
    CosmosTx {
        msgs: vec![],
        fee,
        gas,
        fee_payer: Addr::unchecked(PAYER),
        fee_granter: None,
    }
}

/// Min gas price of 0.1akii in CheckTx
pub fn mock_deduct_fee_decorator<'a>(keeper: &'a Keeper<'a>) -> DeductFeeDecorator<'a> {
    DeductFeeDecorator {
        accounts:    &MockAccounts,
        bank:        &MockBank,
        feegrant:    Some(&MockFeegrant),
        fee_abs:     keeper,
        fee_checker: Box::new(MinGasPriceChecker::new(vec![GasPrice::new(
            Params::DEFAULT_NATIVE_DENOM,
            Decimal::percent(10),
        )])),
    }
}

pub fn mock_mono_decorator<'a>(keeper: &'a Keeper<'a>) -> MonoDecorator<'a> {
    MonoDecorator {
        accounts:   &MockAccounts,
        bank:       &MockBank,
        fee_market: &MockFeeMarket,
        fee_abs:    keeper,
        config:     EvmConfig::default(),
    }
}

/// A dynamic fee message from the payer
pub fn mock_eth_msg(nonce: u64, gas: u64, value: u128, gas_fee_cap: u128, gas_tip_cap: u128) -> EthereumMsg {
    EthereumMsg {
        tx_type: EthTxType::DynamicFee,
        from: Addr::unchecked(PAYER),
        nonce,
        gas,
        value: Uint128::new(value),
        gas_fee_cap: Uint128::new(gas_fee_cap),
        gas_tip_cap: Uint128::new(gas_tip_cap),
    }
}
