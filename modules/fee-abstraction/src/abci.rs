use {
    crate::{context::Context, error::Result, keeper::Keeper},
    cosmwasm_std::Event,
    feeabs::{
        ATTRIBUTE_KEY_DENOM, ATTRIBUTE_KEY_ENABLED, ATTRIBUTE_KEY_PRICE,
        EVENT_TYPE_FEE_TOKEN_PRICE,
    },
};

impl Keeper<'_> {
    /// Refresh the fee token prices. Must run once per block, before any
    /// transaction in the block is admitted.
    pub fn begin_blocker(&self, ctx: &mut Context) -> Result<()> {
        if !self.params(ctx.store)?.enabled {
            return Ok(());
        }

        let fee_tokens = self.calculate_fee_token_prices(ctx.store)?;

        for token in fee_tokens.items {
            ctx.emit(
                Event::new(EVENT_TYPE_FEE_TOKEN_PRICE)
                    .add_attribute(ATTRIBUTE_KEY_DENOM, token.denom)
                    .add_attribute(ATTRIBUTE_KEY_PRICE, token.price.to_string())
                    .add_attribute(ATTRIBUTE_KEY_ENABLED, token.enabled.to_string()),
            );
        }

        Ok(())
    }
}

// ----------------------------------- Tests -----------------------------------
