use {
    crate::{
        cosmos::DeductFeeDecorator,
        error::Result,
        evm::MonoDecorator,
        tx::Tx,
    },
    cosmwasm_std::Coin,
    feeabs_module::Context,
};

/// Outcome of a transaction that passed admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnteResponse {
    /// What was actually deducted, in the token the payer settled in
    pub fee_charged: Vec<Coin>,
    pub gas_wanted:  u64,
}

/// Routes each transaction to the decorator for its kind.
///
/// Runs the decorator on a branch of the context. Nothing the decorator did
/// is kept if it fails, including fees already deducted or ERC-20 tokens
/// already unwrapped.
pub struct AnteHandler<'a> {
    pub cosmos: DeductFeeDecorator<'a>,
    pub evm:    MonoDecorator<'a>,
}

impl AnteHandler<'_> {
    pub fn handle(&self, ctx: &mut Context, tx: &Tx) -> Result<AnteResponse> {
        ctx.branch(|ctx| match tx {
            Tx::Cosmos(tx) => self.cosmos.handle(ctx, tx),
            Tx::Ethereum(tx) => self.evm.handle(ctx, tx),
        })
    }
}

// ----------------------------------- Tests -----------------------------------
