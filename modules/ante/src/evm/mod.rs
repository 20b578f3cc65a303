mod account_verification;

pub use account_verification::{verify_account_balance, verify_if_account_exists};

use {
    crate::{
        cosmos::deduct_fees,
        error::{Error, Result},
        fee_checker::coins_to_string,
        handler::AnteResponse,
        tx::{EthereumMsg, EthereumTx},
    },
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{Addr, Coin, Decimal, Event, Storage, Uint128},
    feeabs::{
        AccountKeeper, BankKeeper, FeeMarketKeeper, ATTRIBUTE_KEY_FEE, ATTRIBUTE_KEY_FEE_PAYER,
        ATTRIBUTE_KEY_TX_NONCE, EVENT_TYPE_ETHEREUM_TX, EVENT_TYPE_TX,
    },
    feeabs_module::{Context, Keeper},
};

#[cw_serde]
pub struct EvmConfig {
    /// Denom fees and values are denominated in on the EVM side
    pub evm_denom: String,

    /// Upper bound on the gas a single transaction may reserve in CheckTx.
    /// Zero means no bound.
    pub max_gas_wanted: u64,

    /// The validator's own minimum gas price, enforced in CheckTx only
    pub mempool_min_gas_price: Decimal,
}

impl Default for EvmConfig {
    fn default() -> Self {
        Self {
            evm_denom:             "akii".into(),
            max_gas_wanted:        0,
            mempool_min_gas_price: Decimal::zero(),
        }
    }
}

/// Runs every admission check of an Ethereum transaction in a single pass.
///
/// The value check runs twice: once before the fee is deducted, and again
/// after, because paying the fee may spend native balance the transfer needs.
pub struct MonoDecorator<'a> {
    pub accounts:   &'a dyn AccountKeeper,
    pub bank:       &'a dyn BankKeeper,
    pub fee_market: &'a dyn FeeMarketKeeper,
    pub fee_abs:    &'a Keeper<'a>,
    pub config:     EvmConfig,
}

impl MonoDecorator<'_> {
    pub fn handle(&self, ctx: &mut Context, tx: &EthereumTx) -> Result<AnteResponse> {
        // multiple messages per transaction are not supported
        let [msg] = tx.msgs.as_slice() else {
            return Err(Error::InvalidMsgCount {
                count: tx.msgs.len(),
            });
        };

        if msg.gas == 0 {
            return Err(Error::ZeroGas);
        }

        let base_fee = self.fee_market.base_fee(ctx.store)?;

        // 1. mempool inclusion fee, charged on the full fee cap
        if ctx.is_check_tx() {
            check_min_fee(msg.fee()?, self.config.mempool_min_gas_price, msg.gas)?;
        }

        // 2. global min fee, on what will actually be paid
        let fee = msg.effective_fee(base_fee)?;
        let global_min_gas_price = self.fee_market.min_gas_price(ctx.store)?;
        check_min_fee(fee, global_min_gas_price, msg.gas)?;

        // 3. sender must be an EOA
        verify_if_account_exists(ctx.store, self.accounts, &msg.from)?;

        // 4. can transfer: the fee cap must cover the block's base fee, and
        // the balance the value
        if let Some(base_fee) = base_fee {
            if msg.gas_fee_cap < base_fee {
                return Err(Error::InsufficientFee {
                    required: base_fee.to_string(),
                    provided: msg.gas_fee_cap.to_string(),
                });
            }
        }
        self.verify_value(ctx.store, msg)?;

        // 5. convert and deduct the fee
        let fees = vec![Coin {
            denom:  self.config.evm_denom.clone(),
            amount: fee,
        }];
        let charged = self.fee_abs.convert_native_fee(ctx, &msg.from, &fees)?;
        consume_fees_and_emit_event(ctx, self.bank, &msg.from, &charged)?;

        // 6. the fee may have spent balance the value transfer needs
        self.verify_value(ctx.store, msg)?;

        // 7. gas wanted
        let gas_wanted = if ctx.is_check_tx() && self.config.max_gas_wanted > 0 {
            msg.gas.min(self.config.max_gas_wanted)
        } else {
            msg.gas
        };

        // 8. nonce
        self.increment_nonce(ctx.store, msg)?;

        let tip = msg.effective_tip(base_fee);
        ctx.priority = i64::try_from(tip.u128()).unwrap_or(i64::MAX);

        ctx.emit(
            Event::new(EVENT_TYPE_ETHEREUM_TX)
                .add_attribute(ATTRIBUTE_KEY_TX_NONCE, msg.nonce.to_string()),
        );

        tracing::info!(
            target: "feeabs::ante",
            from = %msg.from,
            gas_wanted,
            gas_limit = msg.gas,
            fee = %coins_to_string(&charged),
            priority = ctx.priority,
            base_fee = ?base_fee,
            tx_type = ?msg.tx_type,
            "processed EVM message",
        );

        Ok(AnteResponse {
            fee_charged: charged,
            gas_wanted,
        })
    }

    fn verify_value(&self, store: &dyn Storage, msg: &EthereumMsg) -> Result<()> {
        let balance = self.bank.balance(store, &msg.from, &self.config.evm_denom)?;
        verify_account_balance(balance.amount, msg.value)
    }

    fn increment_nonce(&self, store: &mut dyn Storage, msg: &EthereumMsg) -> Result<()> {
        let Some(mut account) = self.accounts.account(store, &msg.from)? else {
            return Err(Error::UnknownAddress {
                address: msg.from.to_string(),
            });
        };

        if msg.nonce != account.sequence {
            return Err(Error::InvalidNonce {
                expected: account.sequence,
                got:      msg.nonce,
            });
        }

        account.sequence = account.sequence.checked_add(1).ok_or_else(|| Error::InvalidNonce {
            expected: account.sequence,
            got:      msg.nonce,
        })?;

        self.accounts.set_account(store, &account).map_err(Into::into)
    }
}

/// `fee` must be at least `min_gas_price × gas`, rounded up
fn check_min_fee(fee: Uint128, min_gas_price: Decimal, gas: u64) -> Result<()> {
    if min_gas_price.is_zero() {
        return Ok(());
    }

    let required = Uint128::from(gas).checked_mul_ceil(min_gas_price)?;

    if fee < required {
        return Err(Error::InsufficientFee {
            required: required.to_string(),
            provided: fee.to_string(),
        });
    }

    Ok(())
}

fn consume_fees_and_emit_event(
    ctx:  &mut Context,
    bank: &dyn BankKeeper,
    from: &Addr,
    fees: &[Coin],
) -> Result<()> {
    deduct_fees(ctx.store, bank, from, fees)?;

    ctx.emit(
        Event::new(EVENT_TYPE_TX)
            .add_attribute(ATTRIBUTE_KEY_FEE, coins_to_string(fees))
            .add_attribute(ATTRIBUTE_KEY_FEE_PAYER, from.as_str()),
    );

    Ok(())
}

// ----------------------------------- Tests -----------------------------------
