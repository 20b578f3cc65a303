use {
    crate::{Context, ExecMode, Keeper},
    cosmwasm_std::{testing::mock_env, Addr, Decimal, Storage},
    feeabs::{FeeTokenMetadata, GenesisState, Params},
    feeabs_mocks::{MockBank, MockErc20, MockOracle},
    std::str::FromStr,
};

pub const AUTHORITY: &str = "gov";

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn mock_keeper() -> Keeper<'static> {
    Keeper::new(Addr::unchecked(AUTHORITY), &MockBank, &MockErc20, &MockOracle)
}

pub fn mock_ctx(store: &mut dyn Storage) -> Context<'_> {
    Context::new(store, mock_env().block, ExecMode::DeliverTx)
}

/// Run genesis with default params and the given fee tokens, and make the
/// tokens' oracle denoms vote targets.
pub fn setup(store: &mut dyn Storage, fee_tokens: Vec<FeeTokenMetadata>) {
    let vote_targets = fee_tokens.iter().map(|token| token.oracle_denom.as_str()).collect::<Vec<_>>();
    MockOracle::set_vote_targets(store, &vote_targets).unwrap();

    mock_keeper()
        .init_genesis(store, &GenesisState {
            params:     Params::default(),
            fee_tokens: fee_tokens.into(),
        })
        .unwrap();
}
