use {
    crate::{
        error::{Error, Result},
        fee_checker::{coins_to_string, TxFeeChecker},
        handler::AnteResponse,
        tx::CosmosTx,
    },
    cosmwasm_std::{Addr, Coin, Event, Storage},
    feeabs::{
        AccountKeeper, BankKeeper, FeegrantKeeper, ATTRIBUTE_KEY_FEE, ATTRIBUTE_KEY_FEE_PAYER,
        EVENT_TYPE_TX, FEE_COLLECTOR_NAME,
    },
    feeabs_module::{Context, Keeper},
};

/// Deducts fees from the fee payer of a native transaction: the fee granter
/// if one is set, otherwise the first signer.
///
/// The fee is converted through the fee abstraction keeper first, so the
/// payer may settle it in any registered fee token.
pub struct DeductFeeDecorator<'a> {
    pub accounts:    &'a dyn AccountKeeper,
    pub bank:        &'a dyn BankKeeper,
    /// None if the chain has no fee grant module
    pub feegrant:    Option<&'a dyn FeegrantKeeper>,
    pub fee_abs:     &'a Keeper<'a>,
    pub fee_checker: Box<dyn TxFeeChecker + 'a>,
}

impl DeductFeeDecorator<'_> {
    pub fn handle(&self, ctx: &mut Context, tx: &CosmosTx) -> Result<AnteResponse> {
        let simulate = ctx.is_simulate();

        if !simulate && ctx.block.height > 0 && tx.gas == 0 {
            return Err(Error::ZeroGas);
        }

        let (fee, priority) = if simulate {
            (tx.fee.clone(), 0)
        } else {
            self.fee_checker.check_tx_fee(ctx, tx)?
        };

        let charged = self.check_deduct_fee(ctx, tx, &fee)?;

        ctx.priority = priority;

        Ok(AnteResponse {
            fee_charged: charged,
            gas_wanted:  tx.gas,
        })
    }

    fn check_deduct_fee(&self, ctx: &mut Context, tx: &CosmosTx, fee: &[Coin]) -> Result<Vec<Coin>> {
        if self.accounts.module_address(ctx.store, FEE_COLLECTOR_NAME).is_none() {
            return Err(Error::FeeCollectorNotSet {
                module: FEE_COLLECTOR_NAME.into(),
            });
        }

        let mut deduct_from = &tx.fee_payer;

        if let Some(granter) = &tx.fee_granter {
            let Some(feegrant) = self.feegrant else {
                return Err(Error::FeeGrantsDisabled);
            };

            if *granter != tx.fee_payer {
                feegrant
                    .use_granted_fees(ctx.store, granter, &tx.fee_payer, fee, &tx.msgs)
                    .map_err(|source| Error::FeeGrantDenied {
                        granter: granter.into(),
                        grantee: tx.fee_payer.to_string(),
                        source,
                    })?;
            }

            deduct_from = granter;
        }

        let Some(account) = self.accounts.account(ctx.store, deduct_from)? else {
            return Err(Error::UnknownAddress {
                address: deduct_from.into(),
            });
        };

        let mut charged = vec![];

        if !fee.iter().all(|coin| coin.amount.is_zero()) {
            charged = self.fee_abs.convert_native_fee(ctx, &account.address, fee)?;
            deduct_fees(ctx.store, self.bank, &account.address, &charged)?;
        }

        ctx.emit(
            Event::new(EVENT_TYPE_TX)
                .add_attribute(ATTRIBUTE_KEY_FEE, coins_to_string(&charged))
                .add_attribute(ATTRIBUTE_KEY_FEE_PAYER, deduct_from.as_str()),
        );

        Ok(charged)
    }
}

/// Move the fee from the payer to the fee collector
pub(crate) fn deduct_fees(
    store: &mut dyn Storage,
    bank:  &dyn BankKeeper,
    payer: &Addr,
    fees:  &[Coin],
) -> Result<()> {
    let fees = fees.iter().filter(|coin| !coin.amount.is_zero()).cloned().collect::<Vec<_>>();

    if fees.is_empty() {
        return Ok(());
    }

    bank.send_coins_from_account_to_module(store, payer, FEE_COLLECTOR_NAME, &fees)
        .map_err(Into::into)
}

// ----------------------------------- Tests -----------------------------------
