use {
    cosmwasm_std::{StdResult, Storage},
    cw_storage_plus::Item,
    feeabs::{FeeTokenMetadataCollection, Params},
};

pub const PARAMS: Item<Params> = Item::new("params");

// in selection order
pub const FEE_TOKENS: Item<FeeTokenMetadataCollection> = Item::new("fee_tokens");

/// The fee tokens, or an empty collection if none were ever written
pub fn load_fee_tokens(store: &dyn Storage) -> StdResult<FeeTokenMetadataCollection> {
    FEE_TOKENS.may_load(store).map(Option::unwrap_or_default)
}
