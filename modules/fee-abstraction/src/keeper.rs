use {
    crate::{
        error::Result,
        state::{load_fee_tokens, FEE_TOKENS, PARAMS},
    },
    cosmwasm_std::{Addr, StdResult, Storage},
    feeabs::{
        BankKeeper, Erc20Keeper, FeeTokenMetadata, FeeTokenMetadataCollection, OracleKeeper,
        Params,
    },
};

/// Owns the fee abstraction module's state, and holds references to the
/// modules it depends on.
pub struct Keeper<'a> {
    /// The only address allowed to update params and fee tokens
    pub authority: Addr,
    pub bank:      &'a dyn BankKeeper,
    pub erc20:     &'a dyn Erc20Keeper,
    pub oracle:    &'a dyn OracleKeeper,
}

impl<'a> Keeper<'a> {
    pub fn new(
        authority: Addr,
        bank:      &'a dyn BankKeeper,
        erc20:     &'a dyn Erc20Keeper,
        oracle:    &'a dyn OracleKeeper,
    ) -> Self {
        Self {
            authority,
            bank,
            erc20,
            oracle,
        }
    }

    pub fn params(&self, store: &dyn Storage) -> StdResult<Params> {
        PARAMS.load(store)
    }

    pub fn set_params(&self, store: &mut dyn Storage, params: &Params) -> Result<()> {
        params.validate()?;
        PARAMS.save(store, params).map_err(Into::into)
    }

    pub fn fee_tokens(&self, store: &dyn Storage) -> StdResult<FeeTokenMetadataCollection> {
        load_fee_tokens(store)
    }

    pub fn set_fee_tokens(
        &self,
        store:      &mut dyn Storage,
        fee_tokens: &FeeTokenMetadataCollection,
    ) -> Result<()> {
        fee_tokens.validate()?;
        FEE_TOKENS.save(store, fee_tokens).map_err(Into::into)
    }

    pub fn fee_token(&self, store: &dyn Storage, denom: &str) -> StdResult<Option<FeeTokenMetadata>> {
        Ok(self.fee_tokens(store)?.get(denom).cloned())
    }
}
