use {
    crate::{
        error::ValidationError,
        fee_token::{FeeTokenMetadata, FeeTokenMetadataCollection},
        params::Params,
    },
    cosmwasm_schema::{cw_serde, QueryResponses},
};

#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub params:     Params,
    pub fee_tokens: FeeTokenMetadataCollection,
}

impl GenesisState {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.params.validate()?;
        self.fee_tokens.validate()
    }
}

/// Governance-gated updates. Each message replaces its target wholesale.
#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the module params
    UpdateParams {
        /// Must match the keeper's governance authority
        authority: String,
        params:    Params,
    },

    /// Replace the registered fee tokens. The new collection's order becomes
    /// the order tokens are tried in.
    UpdateFeeTokens {
        authority:  String,
        fee_tokens: FeeTokenMetadataCollection,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The module params
    #[returns(Params)]
    Params {},

    /// All registered fee tokens, in selection order
    #[returns(FeeTokenMetadataCollection)]
    FeeTokens {},

    /// A single fee token by its bank denom
    #[returns(FeeTokenMetadata)]
    FeeToken {
        denom: String,
    },
}

// ----------------------------------- Tests -----------------------------------
