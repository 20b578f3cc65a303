mod coins;
mod denom;
mod error;
mod fee_token;
mod keepers;
mod msg;
mod params;
mod price;

pub use crate::{
    coins::Coins,
    denom::validate_denom,
    error::{PriceError, ValidationError},
    fee_token::{FeeTokenMetadata, FeeTokenMetadataCollection},
    keepers::{
        AccountKeeper, BankKeeper, BaseAccount, Erc20Keeper, FeeMarketKeeper, FeegrantKeeper,
        OracleKeeper, OracleTwap, TokenPair,
    },
    msg::{ExecuteMsg, GenesisState, QueryMsg},
    params::Params,
    price::{calculate_token_price, clamp_price, convert_amount},
};

// ---------------------------------- module -----------------------------------

/// Name of the module account that collects transaction fees
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

// ---------------------------------- events -----------------------------------

/// Emitted by both ante paths once the fee has been moved out of the payer's
/// account
pub const EVENT_TYPE_TX: &str = "tx";

/// Emitted by the EVM ante path after the sender's nonce is incremented
pub const EVENT_TYPE_ETHEREUM_TX: &str = "ethereum_tx";

/// Emitted by the conversion engine when an alternative token is selected
pub const EVENT_TYPE_CONVERT_FEES: &str = "convert_fees";

/// Emitted at the beginning of each block, once per registered fee token
pub const EVENT_TYPE_FEE_TOKEN_PRICE: &str = "fee_token_price";

pub const ATTRIBUTE_KEY_FEE: &str = "fee";
pub const ATTRIBUTE_KEY_FEE_PAYER: &str = "fee_payer";
pub const ATTRIBUTE_KEY_ORIGINAL_FEE: &str = "original_fee";
pub const ATTRIBUTE_KEY_CONVERTED_FEE: &str = "converted_fee";
pub const ATTRIBUTE_KEY_PRICE: &str = "price";
pub const ATTRIBUTE_KEY_DENOM: &str = "denom";
pub const ATTRIBUTE_KEY_ENABLED: &str = "enabled";
pub const ATTRIBUTE_KEY_TX_NONCE: &str = "tx_nonce";
