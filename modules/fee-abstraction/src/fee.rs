use {
    crate::{
        context::Context,
        error::{Error, Result},
        keeper::Keeper,
    },
    cosmwasm_std::{Addr, Coin, Event, Storage, Uint128},
    feeabs::{
        convert_amount, Coins, FeeTokenMetadata, ATTRIBUTE_KEY_CONVERTED_FEE,
        ATTRIBUTE_KEY_FEE_PAYER, ATTRIBUTE_KEY_ORIGINAL_FEE, ATTRIBUTE_KEY_PRICE,
        EVENT_TYPE_CONVERT_FEES,
    },
};

impl Keeper<'_> {
    /// Given a fee denominated in the native token, find a fee the payer can
    /// actually pay.
    ///
    /// If the payer holds enough of the native token, the fee is returned
    /// as-is. Otherwise, the registered fee tokens are tried in order, and the
    /// first one the payer can cover (unwrapping its ERC-20 balance if needed)
    /// is charged.
    ///
    /// Converted amounts are rounded down. A token for which the fee rounds
    /// down to zero is skipped, so a fee is never settled for nothing.
    pub fn convert_native_fee(
        &self,
        ctx:   &mut Context,
        payer: &Addr,
        fee:   &[Coin],
    ) -> Result<Vec<Coin>> {
        if fee.iter().all(|coin| coin.amount.is_zero()) {
            return Ok(fee.to_vec());
        }

        let coins = Coins::try_from(fee).map_err(|err| Error::InvalidFee {
            reason: err.to_string(),
        })?;

        let Some(required) = coins.single() else {
            return Err(Error::InvalidFee {
                reason: format!("expecting exactly one fee coin, found `{coins}`"),
            });
        };

        let params = self.params(ctx.store)?;

        if !params.enabled {
            return Ok(fee.to_vec());
        }

        // fees in any other denom were already priced by the payer
        if required.denom != params.native_denom {
            return Ok(fee.to_vec());
        }

        let balance = self.bank.balance(ctx.store, payer, &required.denom)?;
        if balance.amount >= required.amount {
            return Ok(fee.to_vec());
        }

        let fee_tokens = self.fee_tokens(ctx.store)?;
        let mut attempted = vec![];

        for token in fee_tokens.items.iter().filter(|token| token.is_quotable()) {
            let amount = convert_amount(required.amount, token.price)?;

            if amount.is_zero() {
                tracing::debug!(
                    target: "feeabs",
                    denom = %token.denom,
                    price = %token.price,
                    "fee is worth less than one unit of fee token; skipping",
                );
                continue;
            }

            attempted.push(token.denom.clone());

            if !self.prepare_balance(ctx.store, payer, token, amount)? {
                continue;
            }

            let converted = Coin {
                denom: token.denom.clone(),
                amount,
            };

            tracing::debug!(
                target: "feeabs",
                %payer,
                original_fee = %required,
                converted_fee = %converted,
                "converted native fee",
            );

            ctx.emit(
                Event::new(EVENT_TYPE_CONVERT_FEES)
                    .add_attribute(ATTRIBUTE_KEY_FEE_PAYER, payer.as_str())
                    .add_attribute(ATTRIBUTE_KEY_ORIGINAL_FEE, required.to_string())
                    .add_attribute(ATTRIBUTE_KEY_CONVERTED_FEE, converted.to_string())
                    .add_attribute(ATTRIBUTE_KEY_PRICE, token.price.to_string()),
            );

            return Ok(vec![converted]);
        }

        Err(Error::InsufficientFunds {
            required,
            attempted,
        })
    }

    /// Make sure the payer holds at least `amount` of the fee token as a liquid
    /// balance, unwrapping exactly `amount` from the token's ERC-20 if the
    /// liquid balance falls short.
    ///
    /// Returns false if neither balance covers the amount.
    pub fn prepare_balance(
        &self,
        store:  &mut dyn Storage,
        payer:  &Addr,
        token:  &FeeTokenMetadata,
        amount: Uint128,
    ) -> Result<bool> {
        let balance = self.bank.balance(store, payer, &token.denom)?;
        if balance.amount >= amount {
            return Ok(true);
        }

        let Some(pair) = self.erc20.token_pair(store, &token.denom)? else {
            return Ok(false);
        };

        if !pair.enabled {
            return Ok(false);
        }

        let wrapped = self.erc20.balance_of(store, &pair.erc20_contract, payer)?;
        if wrapped < amount {
            return Ok(false);
        }

        self.erc20
            .convert_erc20(store, amount, payer, &pair.erc20_contract)
            .map_err(|source| Error::Unwrap {
                account: payer.into(),
                denom: token.denom.clone(),
                amount,
                source,
            })?;

        tracing::debug!(
            target: "feeabs",
            %payer,
            denom = %token.denom,
            %amount,
            erc20 = %pair.erc20_contract,
            "unwrapped erc20 for fee",
        );

        Ok(true)
    }
}

// ----------------------------------- Tests -----------------------------------
