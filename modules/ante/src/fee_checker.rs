use {
    crate::{
        error::{Error, Result},
        tx::CosmosTx,
    },
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{Coin, Decimal, Uint128},
    feeabs_module::Context,
};

/// Minimum price per unit of gas in one denom
#[cw_serde]
pub struct GasPrice {
    pub denom:  String,
    pub amount: Decimal,
}

impl GasPrice {
    pub fn new(denom: impl Into<String>, amount: Decimal) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Decides the fee a native transaction must pay and the priority it gets
pub trait TxFeeChecker {
    fn check_tx_fee(&self, ctx: &Context, tx: &CosmosTx) -> Result<(Vec<Coin>, i64)>;
}

/// Enforces the validator's minimum gas prices during mempool admission, and
/// prioritizes transactions by gas price.
#[derive(Debug, Clone, Default)]
pub struct MinGasPriceChecker {
    pub min_gas_prices: Vec<GasPrice>,
}

impl MinGasPriceChecker {
    pub fn new(min_gas_prices: Vec<GasPrice>) -> Self {
        Self {
            min_gas_prices,
        }
    }
}

impl TxFeeChecker for MinGasPriceChecker {
    fn check_tx_fee(&self, ctx: &Context, tx: &CosmosTx) -> Result<(Vec<Coin>, i64)> {
        // block execution accepts whatever fee the proposer included
        if ctx.is_check_tx() && self.min_gas_prices.iter().any(|price| !price.amount.is_zero()) {
            let required = self
                .min_gas_prices
                .iter()
                .filter(|price| !price.amount.is_zero())
                .map(|price| -> Result<_> {
                    Ok(Coin {
                        denom:  price.denom.clone(),
                        amount: Uint128::from(tx.gas).checked_mul_ceil(price.amount)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            // enough of any one of the accepted denoms suffices
            let sufficient = required.iter().any(|required| {
                tx.fee
                    .iter()
                    .any(|coin| coin.denom == required.denom && coin.amount >= required.amount)
            });

            if !sufficient {
                return Err(Error::InsufficientFee {
                    required: coins_to_string(&required),
                    provided: coins_to_string(&tx.fee),
                });
            }
        }

        Ok((tx.fee.clone(), tx_priority(&tx.fee, tx.gas)))
    }
}

/// The lowest gas price across the fee's denoms
fn tx_priority(fee: &[Coin], gas: u64) -> i64 {
    if gas == 0 {
        return 0;
    }

    fee.iter()
        .map(|coin| {
            let gas_price = coin.amount.u128() / u128::from(gas);
            i64::try_from(gas_price).unwrap_or(i64::MAX)
        })
        .min()
        .unwrap_or(0)
}

pub(crate) fn coins_to_string(coins: &[Coin]) -> String {
    coins.iter().map(Coin::to_string).collect::<Vec<_>>().join(",")
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::testing::mock_cosmos_tx,
        cosmwasm_std::{coin, testing::{mock_env, MockStorage}},
        feeabs_module::ExecMode,
        std::str::FromStr,
    };

    fn checker() -> MinGasPriceChecker {
        MinGasPriceChecker::new(vec![
            GasPrice::new("akii", Decimal::from_str("0.25").unwrap()),
            GasPrice::new("ufree", Decimal::zero()),
        ])
    }

    #[test]
    fn enforcing_min_gas_price_in_check_tx() {
        let mut store = MockStorage::new();
        let ctx = Context::new(&mut store, mock_env().block, ExecMode::CheckTx);

        // 0.25 * 1001 = 250.25, rounded up
        let tx = mock_cosmos_tx(vec![coin(251, "akii")], 1001);
        assert_eq!(checker().check_tx_fee(&ctx, &tx), Ok((vec![coin(251, "akii")], 0)));

        let tx = mock_cosmos_tx(vec![coin(250, "akii")], 1001);
        assert_eq!(
            checker().check_tx_fee(&ctx, &tx),
            Err(Error::InsufficientFee {
                required: "251akii".into(),
                provided: "250akii".into(),
            }),
        );

        // paying in a denom that has no min price doesn't help
        let tx = mock_cosmos_tx(vec![coin(1000, "ufree")], 1001);
        assert!(checker().check_tx_fee(&ctx, &tx).is_err());
    }

    #[test]
    fn skipping_min_gas_price_outside_check_tx() {
        let mut store = MockStorage::new();
        let ctx = Context::new(&mut store, mock_env().block, ExecMode::DeliverTx);

        let tx = mock_cosmos_tx(vec![], 1000);
        assert_eq!(checker().check_tx_fee(&ctx, &tx), Ok((vec![], 0)));
    }

    #[test]
    fn prioritizing_by_gas_price() {
        assert_eq!(tx_priority(&[coin(5000, "akii")], 1000), 5);
        assert_eq!(tx_priority(&[coin(5999, "akii")], 1000), 5);
        assert_eq!(tx_priority(&[coin(5000, "akii"), coin(3000, "uatom")], 1000), 3);
        assert_eq!(tx_priority(&[], 1000), 0);
        assert_eq!(tx_priority(&[coin(5000, "akii")], 0), 0);
        assert_eq!(tx_priority(&[coin(u128::MAX, "akii")], 1), i64::MAX);
    }
}
