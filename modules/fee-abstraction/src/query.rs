use {
    crate::keeper::Keeper,
    cosmwasm_std::{to_json_binary, Binary, StdError, StdResult, Storage},
    feeabs::{FeeTokenMetadata, QueryMsg},
};

impl Keeper<'_> {
    pub fn query(&self, store: &dyn Storage, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Params {} => to_json_binary(&self.params(store)?),
            QueryMsg::FeeTokens {} => to_json_binary(&self.fee_tokens(store)?),
            QueryMsg::FeeToken {
                denom,
            } => to_json_binary(&query_fee_token(self, store, denom)?),
        }
    }
}

fn query_fee_token(keeper: &Keeper, store: &dyn Storage, denom: String) -> StdResult<FeeTokenMetadata> {
    keeper
        .fee_token(store, &denom)?
        .ok_or_else(|| StdError::not_found(format!("fee token `{denom}`")))
}

// ----------------------------------- Tests -----------------------------------
