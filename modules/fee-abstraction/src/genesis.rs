use {
    crate::{
        error::Result,
        keeper::Keeper,
        state::{FEE_TOKENS, PARAMS},
        CONTRACT_NAME, CONTRACT_VERSION,
    },
    cosmwasm_std::{StdResult, Storage},
    feeabs::GenesisState,
};

impl Keeper<'_> {
    pub fn init_genesis(&self, store: &mut dyn Storage, genesis: &GenesisState) -> Result<()> {
        genesis.validate()?;
        self.oracle.validate_lookback_seconds(store, genesis.params.twap_lookback_window)?;

        cw2::set_contract_version(store, CONTRACT_NAME, CONTRACT_VERSION)?;

        PARAMS.save(store, &genesis.params)?;
        FEE_TOKENS.save(store, &genesis.fee_tokens)?;

        Ok(())
    }

    pub fn export_genesis(&self, store: &dyn Storage) -> StdResult<GenesisState> {
        Ok(GenesisState {
            params:     self.params(store)?,
            fee_tokens: self.fee_tokens(store)?,
        })
    }
}

// ----------------------------------- Tests -----------------------------------
