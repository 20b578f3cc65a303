use {
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{Addr, Binary, Coin, OverflowError, Uint128},
};

/// A transaction submitted for admission
#[cw_serde]
pub enum Tx {
    Cosmos(CosmosTx),
    Ethereum(EthereumTx),
}

#[cw_serde]
pub struct CosmosTx {
    /// Encoded messages, handed to the fee grant module when a grant is used
    pub msgs: Vec<Binary>,

    /// Fee offered by the signer, in the native denom
    pub fee: Vec<Coin>,

    pub gas: u64,

    /// The first signer
    pub fee_payer: Addr,

    /// If set, fees are deducted from this account instead of the payer's
    pub fee_granter: Option<Addr>,
}

#[cw_serde]
pub struct EthereumTx {
    pub msgs: Vec<EthereumMsg>,
}

#[cw_serde]
pub enum EthTxType {
    Legacy,
    DynamicFee,
}

#[cw_serde]
pub struct EthereumMsg {
    pub tx_type:     EthTxType,
    pub from:        Addr,
    pub nonce:       u64,
    pub gas:         u64,
    /// Amount transferred by the call; does not include fees
    pub value:       Uint128,
    /// Gas price of a legacy tx, or max fee per gas of a dynamic fee tx
    pub gas_fee_cap: Uint128,
    /// Equal to the gas price for a legacy tx
    pub gas_tip_cap: Uint128,
}

impl EthereumMsg {
    /// The price per gas actually paid, given the current base fee
    pub fn effective_gas_price(&self, base_fee: Option<Uint128>) -> Uint128 {
        match (&self.tx_type, base_fee) {
            (EthTxType::DynamicFee, Some(base_fee)) => {
                self.gas_fee_cap.min(base_fee.saturating_add(self.gas_tip_cap))
            },
            _ => self.gas_fee_cap,
        }
    }

    /// Fee if the whole fee cap were paid
    pub fn fee(&self) -> Result<Uint128, OverflowError> {
        self.gas_fee_cap.checked_mul(self.gas.into())
    }

    pub fn effective_fee(&self, base_fee: Option<Uint128>) -> Result<Uint128, OverflowError> {
        self.effective_gas_price(base_fee).checked_mul(self.gas.into())
    }

    /// Per-gas amount that goes to the block proposer rather than being burned
    pub fn effective_tip(&self, base_fee: Option<Uint128>) -> Uint128 {
        self.effective_gas_price(base_fee).saturating_sub(base_fee.unwrap_or_default())
    }
}

// ----------------------------------- Tests -----------------------------------
